//! Outcome and policy types for applying a role set.

use serde::{Deserialize, Serialize};

use super::roles::{ApplyMode, RoleAssignment};

/// How [`crate::JenkinsRoleClient::apply`] reacts to a failing role change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplyPolicy {
    /// Attempt every change, then report all failures together.
    #[default]
    CollectAll,
    /// Stop at the first failing change.
    FailFast,
}

/// Role changes that were applied successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyReport {
    pub mode: ApplyMode,
    pub applied: Vec<RoleAssignment>,
}

impl ApplyReport {
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }
}
