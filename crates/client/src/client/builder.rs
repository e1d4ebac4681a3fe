//! Client builder for constructing [`JenkinsRoleClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, credentials)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # Invariants
//! - `base_url` and `credentials` must be provided before calling `build()`
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use jenkins_role_config::Config;
use jenkins_role_config::constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS};

use crate::auth::Credentials;
use crate::client::JenkinsRoleClient;
use crate::endpoints::AssignEndpoint;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::ApplyPolicy;

/// Builder for creating a new [`JenkinsRoleClient`].
pub struct JenkinsRoleClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    skip_verify: bool,
    timeout: Duration,
    assign_endpoint: AssignEndpoint,
    apply_policy: ApplyPolicy,
    metrics: Option<MetricsCollector>,
}

impl Default for JenkinsRoleClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            assign_endpoint: AssignEndpoint::default(),
            apply_policy: ApplyPolicy::default(),
            metrics: None,
        }
    }
}

impl JenkinsRoleClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Jenkins server, including any context path
    /// (e.g. `https://ci.example.com/jenkins`).
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the basic-auth credentials.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against servers with self-signed certificates you trust.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Select the assign/unassign endpoint pair.
    pub fn assign_endpoint(mut self, endpoint: AssignEndpoint) -> Self {
        self.assign_endpoint = endpoint;
        self
    }

    /// Select how `apply` reacts to failures.
    pub fn apply_policy(mut self, policy: ApplyPolicy) -> Self {
        self.apply_policy = policy;
        self
    }

    /// Record request metrics through the given collector.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Pre-configure the builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.credentials = Some(Credentials::new(
            config.auth.username.clone(),
            config.auth.api_token.clone(),
        ));
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.assign_endpoint = config.connection.assign_endpoint.into();
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    /// Build the [`JenkinsRoleClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns [`ClientError::InvalidConfig`] if `credentials` were not provided.
    /// Returns [`ClientError::HttpError`] if the HTTP client fails to build.
    pub fn build(self) -> Result<JenkinsRoleClient> {
        let base_url = self
            .base_url
            .map(Self::normalize_base_url)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;

        let credentials = self
            .credentials
            .ok_or_else(|| ClientError::InvalidConfig("credentials are required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(JenkinsRoleClient {
            http,
            base_url,
            credentials,
            assign_endpoint: self.assign_endpoint,
            apply_policy: self.apply_policy,
            timeout: self.timeout,
            metrics: self.metrics,
        })
    }
}
