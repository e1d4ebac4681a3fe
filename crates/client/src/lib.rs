//! Jenkins role-strategy client.
//!
//! This crate reconciles a declared set of role-strategy roles for one user
//! against a running Jenkins server: it assigns or unassigns each role with
//! one call per (category, role) pair, and reads back the roles a user holds
//! across the global, item and node categories.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;
pub mod resource;

pub use auth::Credentials;
pub use client::JenkinsRoleClient;
pub use client::builder::JenkinsRoleClientBuilder;
pub use endpoints::AssignEndpoint;
pub use error::{ClientError, ErrorCategory, Result, RoleCallFailure};
pub use metrics::MetricsCollector;
pub use metrics_exporter::{MetricsExporter, MetricsExporterError};
pub use models::{
    ApplyMode, ApplyPolicy, ApplyReport, RoleAssignment, RoleCategory, RoleHolder, RoleListing,
    RoleSet,
};
pub use resource::{RoleBinding, RoleBindingResource};
