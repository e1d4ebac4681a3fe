//! Role reconciliation methods for [`JenkinsRoleClient`].
//!
//! # What this module handles:
//! - Applying (assigning or unassigning) a role set for one user
//! - Fetching the roles one user holds across all categories
//!
//! # What this module does NOT handle:
//! - Low-level HTTP calls (in [`crate::endpoints`])

use tracing::{debug, info, warn};

use crate::client::JenkinsRoleClient;
use crate::endpoints;
use crate::error::{ClientError, Result, RoleCallFailure};
use crate::models::{ApplyMode, ApplyPolicy, ApplyReport, RoleCategory, RoleSet};

pub(crate) fn validate_user_id(user_id: &str) -> Result<()> {
    if user_id.trim().is_empty() {
        return Err(ClientError::InvalidRequest(
            "user id must not be empty".to_string(),
        ));
    }
    Ok(())
}

impl JenkinsRoleClient {
    /// Assign or unassign every role in `roles` for `user_id`.
    ///
    /// One POST is issued per (category, role) pair, global first, then
    /// item, then node. An empty role set issues no requests.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ApplyFailed`] listing the failed changes. With
    /// [`ApplyPolicy::FailFast`] it holds only the first failure; with
    /// [`ApplyPolicy::CollectAll`] every change is attempted first.
    pub async fn apply(
        &self,
        user_id: &str,
        roles: &RoleSet,
        mode: ApplyMode,
    ) -> Result<ApplyReport> {
        validate_user_id(user_id)?;

        let mut applied = Vec::with_capacity(roles.len());
        let mut failures = Vec::new();

        for assignment in roles.assignments(user_id) {
            let result = endpoints::post_role_change(
                &self.http,
                &self.base_url,
                &self.credentials,
                self.assign_endpoint,
                mode,
                &assignment,
                self.timeout,
                self.metrics.as_ref(),
            )
            .await;

            match result {
                Ok(()) => {
                    info!(
                        mode = %mode,
                        category = %assignment.category,
                        role = %assignment.role_name,
                        user = %assignment.user_id,
                        "Role change applied"
                    );
                    if let Some(m) = &self.metrics {
                        m.record_role_change(mode.as_str(), assignment.category.as_str());
                    }
                    applied.push(assignment);
                }
                Err(error) => {
                    warn!(
                        mode = %mode,
                        category = %assignment.category,
                        role = %assignment.role_name,
                        user = %assignment.user_id,
                        error = %error,
                        "Role change failed"
                    );
                    failures.push(RoleCallFailure { assignment, error });
                    if self.apply_policy == ApplyPolicy::FailFast {
                        break;
                    }
                }
            }
        }

        if failures.is_empty() {
            Ok(ApplyReport { mode, applied })
        } else {
            Err(ClientError::ApplyFailed {
                mode,
                succeeded: applied,
                failures,
            })
        }
    }

    /// Convenience for `apply(user_id, roles, ApplyMode::Assign)`.
    pub async fn assign(&self, user_id: &str, roles: &RoleSet) -> Result<ApplyReport> {
        self.apply(user_id, roles, ApplyMode::Assign).await
    }

    /// Convenience for `apply(user_id, roles, ApplyMode::Unassign)`.
    pub async fn unassign(&self, user_id: &str, roles: &RoleSet) -> Result<ApplyReport> {
        self.apply(user_id, roles, ApplyMode::Unassign).await
    }

    /// Fetch the roles `user_id` holds in each category.
    ///
    /// Issues one `getAllRoles` request per category and keeps role names
    /// whose holder list contains `user_id` exactly. Names are sorted.
    pub async fn fetch_user_roles(&self, user_id: &str) -> Result<RoleSet> {
        validate_user_id(user_id)?;

        let mut roles = RoleSet::new();

        for category in RoleCategory::ALL {
            let listing = endpoints::get_all_roles(
                &self.http,
                &self.base_url,
                &self.credentials,
                category,
                self.timeout,
                self.metrics.as_ref(),
            )
            .await?;

            let held = listing.roles_held_by(user_id);
            debug!(
                category = %category,
                user = user_id,
                total = listing.0.len(),
                held = held.len(),
                "Fetched role listing"
            );
            for role in held {
                roles.push(category, role);
            }
        }

        Ok(roles)
    }
}
