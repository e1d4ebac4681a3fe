//! Lifecycle callbacks for a declarative "user has these roles" resource.
//!
//! Mirrors the create/read/update/delete/import shape infrastructure-as-code
//! hosts expect. The binding id is the user id.
//!
//! Invariants:
//! - `read` never contacts the server; it returns the stored state.
//! - `update` never contacts the server; desired-vs-actual diffing is not done.
//! - `delete` unassigns exactly the roles recorded in the binding.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::JenkinsRoleClient;
use crate::client::roles::validate_user_id;
use crate::error::Result;
use crate::models::RoleSet;

/// Stored state of one user's role binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleBinding {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub roles: RoleSet,
}

impl RoleBinding {
    pub fn new(user_id: impl Into<String>, roles: RoleSet) -> Self {
        let user_id = user_id.into();
        Self {
            id: user_id.clone(),
            user_id,
            roles,
        }
    }
}

/// Resource callbacks backed by a [`JenkinsRoleClient`].
#[derive(Debug)]
pub struct RoleBindingResource<'a> {
    client: &'a JenkinsRoleClient,
}

impl<'a> RoleBindingResource<'a> {
    pub fn new(client: &'a JenkinsRoleClient) -> Self {
        Self { client }
    }

    /// Assign every desired role and return the new binding.
    pub async fn create(&self, user_id: &str, roles: RoleSet) -> Result<RoleBinding> {
        validate_user_id(user_id)?;
        let report = self.client.assign(user_id, &roles).await?;
        info!(user = user_id, assigned = report.applied.len(), "Role binding created");
        Ok(RoleBinding::new(user_id, roles))
    }

    /// Return the stored binding unchanged.
    pub async fn read(&self, binding: RoleBinding) -> Result<RoleBinding> {
        Ok(binding)
    }

    /// Record new desired roles without issuing any calls.
    pub async fn update(&self, binding: RoleBinding, roles: RoleSet) -> Result<RoleBinding> {
        Ok(RoleBinding { roles, ..binding })
    }

    /// Unassign every role recorded in the binding.
    pub async fn delete(&self, binding: &RoleBinding) -> Result<()> {
        validate_user_id(&binding.user_id)?;
        let report = self.client.unassign(&binding.user_id, &binding.roles).await?;
        info!(
            user = %binding.user_id,
            unassigned = report.applied.len(),
            "Role binding deleted"
        );
        Ok(())
    }

    /// Build a binding from the roles the server currently lists for `user_id`.
    pub async fn import(&self, user_id: &str) -> Result<RoleBinding> {
        let roles = self.client.fetch_user_roles(user_id).await?;
        info!(user = user_id, roles = roles.len(), "Role binding imported");
        Ok(RoleBinding::new(user_id, roles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoleCategory;

    #[test]
    fn test_binding_id_is_user_id() {
        let binding = RoleBinding::new("alice", RoleSet::new());
        assert_eq!(binding.id, "alice");
        assert_eq!(binding.user_id, "alice");
    }

    #[test]
    fn test_binding_serializes_role_lists() {
        let binding = RoleBinding::new(
            "alice",
            RoleSet::new().with_role(RoleCategory::Global, "admin"),
        );
        let json = serde_json::to_value(&binding).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "alice",
                "user_id": "alice",
                "roles": {"global": ["admin"], "item": [], "node": []}
            })
        );
    }
}
