//! Main Jenkins role client.
//!
//! This module provides the [`JenkinsRoleClient`] that translates role sets
//! into role-strategy plugin calls and back.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `roles`: Apply and fetch operations
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//!
//! # Invariants
//! - Calls are issued one at a time; each is awaited before the next starts
//! - Every failure surfaces as a typed [`crate::ClientError`]

pub mod builder;
pub(crate) mod roles;

use std::time::Duration;

use crate::auth::Credentials;
use crate::endpoints::AssignEndpoint;
use crate::metrics::MetricsCollector;
use crate::models::ApplyPolicy;

/// Jenkins role-strategy client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use jenkins_role_client::{Credentials, JenkinsRoleClient};
/// use secrecy::SecretString;
///
/// let client = JenkinsRoleClient::builder()
///     .base_url("https://jenkins.example.com".to_string())
///     .credentials(Credentials::new("admin", SecretString::new("token".into())))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct JenkinsRoleClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Credentials,
    pub(crate) assign_endpoint: AssignEndpoint,
    pub(crate) apply_policy: ApplyPolicy,
    pub(crate) timeout: Duration,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl JenkinsRoleClient {
    /// Create a new client builder.
    pub fn builder() -> builder::JenkinsRoleClientBuilder {
        builder::JenkinsRoleClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The assign/unassign endpoint pair in use.
    pub fn assign_endpoint(&self) -> AssignEndpoint {
        self.assign_endpoint
    }

    /// The failure policy used by `apply`.
    pub fn apply_policy(&self) -> ApplyPolicy {
        self.apply_policy
    }

    /// The metrics collector, if one was attached.
    pub fn metrics(&self) -> Option<&MetricsCollector> {
        self.metrics.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use secrecy::SecretString;

    fn creds() -> Credentials {
        Credentials::new("admin", SecretString::new("test-token".to_string().into()))
    }

    #[test]
    fn test_client_builder_defaults() {
        let client = JenkinsRoleClient::builder()
            .base_url("https://jenkins.example.com".to_string())
            .credentials(creds())
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "https://jenkins.example.com");
        assert_eq!(client.assign_endpoint(), AssignEndpoint::UserRole);
        assert_eq!(client.apply_policy(), ApplyPolicy::CollectAll);
    }

    #[test]
    fn test_client_builder_missing_base_url() {
        let client = JenkinsRoleClient::builder().credentials(creds()).build();

        assert!(matches!(client.unwrap_err(), ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_client_builder_missing_credentials() {
        let client = JenkinsRoleClient::builder()
            .base_url("https://jenkins.example.com".to_string())
            .build();

        assert!(matches!(client.unwrap_err(), ClientError::InvalidConfig(_)));
    }

    #[test]
    fn test_client_builder_normalizes_base_url() {
        let client = JenkinsRoleClient::builder()
            .base_url("https://jenkins.example.com//".to_string())
            .credentials(creds())
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "https://jenkins.example.com");
    }

    #[test]
    fn test_skip_verify_with_http_url() {
        let client = JenkinsRoleClient::builder()
            .base_url("http://localhost:8080".to_string())
            .credentials(creds())
            .skip_verify(true)
            .build();

        assert!(client.is_ok());
    }
}
