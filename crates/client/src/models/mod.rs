//! Data models for the Jenkins role-strategy API.

pub mod apply;
pub mod roles;

pub use apply::{ApplyPolicy, ApplyReport};
pub use roles::{ApplyMode, RoleAssignment, RoleCategory, RoleHolder, RoleListing, RoleSet};
