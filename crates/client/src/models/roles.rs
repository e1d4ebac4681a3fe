//! Role models for the Jenkins role-strategy API.
//!
//! This module contains the role category namespaces, desired/fetched role
//! sets and the decoded `getAllRoles` listing.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the independent role namespaces exposed by the role-strategy plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleCategory {
    /// Global roles (`globalRoles`).
    Global,
    /// Item (project) roles (`projectRoles`).
    Item,
    /// Node (agent) roles (`slaveRoles`).
    Node,
}

impl RoleCategory {
    /// All categories, in the order calls are issued.
    pub const ALL: [RoleCategory; 3] = [Self::Global, Self::Item, Self::Node];

    /// The role type token the server expects in the `type` field.
    pub const fn server_token(self) -> &'static str {
        match self {
            Self::Global => "globalRoles",
            Self::Item => "projectRoles",
            Self::Node => "slaveRoles",
        }
    }

    /// The user-facing category name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Item => "item",
            Self::Node => "node",
        }
    }

    /// Inverse of [`Self::server_token`].
    pub fn from_server_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.server_token() == token)
    }
}

impl fmt::Display for RoleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .or_else(|| Self::from_server_token(s))
            .ok_or_else(|| format!("unknown role category '{s}' (expected global, item or node)"))
    }
}

/// Whether a role change grants or revokes the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplyMode {
    Assign,
    Unassign,
}

impl ApplyMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assign => "assign",
            Self::Unassign => "unassign",
        }
    }
}

impl fmt::Display for ApplyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single (category, role, user) triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub category: RoleCategory,
    pub role_name: String,
    pub user_id: String,
}

impl fmt::Display for RoleAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} for {}", self.category, self.role_name, self.user_id)
    }
}

/// Role names for one user, grouped by category.
///
/// Used both for the desired role set supplied by callers and for the roles
/// fetched back from the server. Duplicates are preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet {
    #[serde(default)]
    pub global: Vec<String>,
    #[serde(default)]
    pub item: Vec<String>,
    #[serde(default)]
    pub node: Vec<String>,
}

impl RoleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Role names in one category.
    pub fn roles(&self, category: RoleCategory) -> &[String] {
        match category {
            RoleCategory::Global => &self.global,
            RoleCategory::Item => &self.item,
            RoleCategory::Node => &self.node,
        }
    }

    fn roles_mut(&mut self, category: RoleCategory) -> &mut Vec<String> {
        match category {
            RoleCategory::Global => &mut self.global,
            RoleCategory::Item => &mut self.item,
            RoleCategory::Node => &mut self.node,
        }
    }

    /// Append a role name to a category.
    pub fn push(&mut self, category: RoleCategory, role_name: impl Into<String>) {
        self.roles_mut(category).push(role_name.into());
    }

    /// Builder-style variant of [`Self::push`].
    pub fn with_role(mut self, category: RoleCategory, role_name: impl Into<String>) -> Self {
        self.push(category, role_name);
        self
    }

    /// Total number of role names across all categories.
    pub fn len(&self) -> usize {
        self.global.len() + self.item.len() + self.node.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over (category, role name) pairs: global, then item, then node.
    pub fn iter(&self) -> impl Iterator<Item = (RoleCategory, &str)> + '_ {
        RoleCategory::ALL.into_iter().flat_map(move |category| {
            self.roles(category)
                .iter()
                .map(move |name| (category, name.as_str()))
        })
    }

    /// Expand into one assignment per role for `user_id`.
    pub fn assignments(&self, user_id: &str) -> Vec<RoleAssignment> {
        self.iter()
            .map(|(category, role_name)| RoleAssignment {
                category,
                role_name: role_name.to_string(),
                user_id: user_id.to_string(),
            })
            .collect()
    }
}

/// A role holder as listed by `getAllRoles`.
///
/// Older plugin releases list plain SIDs; newer ones list typed entries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RoleHolder {
    Sid(String),
    Entry {
        sid: String,
        #[serde(rename = "type", default)]
        kind: Option<String>,
    },
}

impl RoleHolder {
    pub fn sid(&self) -> &str {
        match self {
            Self::Sid(sid) | Self::Entry { sid, .. } => sid,
        }
    }

    /// Whether this holder names a user, as opposed to a group.
    ///
    /// Plain SIDs and untyped entries are ambiguous and count as users;
    /// `EITHER` is the plugin's marker for an ambiguous SID.
    pub fn is_user(&self) -> bool {
        match self {
            Self::Sid(_) | Self::Entry { kind: None, .. } => true,
            Self::Entry {
                kind: Some(kind), ..
            } => kind.eq_ignore_ascii_case("USER") || kind.eq_ignore_ascii_case("EITHER"),
        }
    }
}

/// Decoded `getAllRoles` response for one category: role name to holders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RoleListing(pub BTreeMap<String, Vec<RoleHolder>>);

impl RoleListing {
    /// Role names held by user `user_id` (exact SID match, groups skipped), sorted.
    pub fn roles_held_by(&self, user_id: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(_, holders)| {
                holders
                    .iter()
                    .any(|h| h.is_user() && h.sid() == user_id)
            })
            .map(|(role, _)| role.clone())
            .collect()
    }
}
