//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Validate and normalize the merged values into a `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Profile file loading logic (delegated to profile.rs).
//!
//! Invariants / Assumptions:
//! - `with_*` builder methods always overwrite; env and profile sources only
//!   fill values that are still unset (`fill_*`).
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use super::profile::apply_profile;
use crate::constants::{DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::types::{AuthConfig, Config, ConnectionConfig, RoleEndpointVariant};

/// Configuration loader that builds config from overrides, env vars and profiles.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    username: Option<String>,
    api_token: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    assign_endpoint: Option<RoleEndpointVariant>,
    profile_name: Option<String>,
    profile_missing: Option<String>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// Skipped when `DOTENV_DISABLED` is `true` or `1`. Missing `.env` files
    /// are silently ignored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DotenvParse` on invalid syntax and
    /// `ConfigError::DotenvIo` when the file exists but cannot be read.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the active profile name to load from the config file.
    pub fn with_profile_name(mut self, name: String) -> Self {
        self.profile_name = Some(name);
        self
    }

    /// Override the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Fill unset values from the selected profile.
    pub fn from_profile(mut self) -> Result<Self, ConfigError> {
        apply_profile(&mut self)?;
        Ok(self)
    }

    /// Fill unset values from `JENKINS_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the Jenkins base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Set the API token.
    pub fn with_api_token(mut self, token: String) -> Self {
        self.api_token = Some(SecretString::new(token.into()));
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the assign/unassign endpoint pair.
    pub fn with_assign_endpoint(mut self, variant: RoleEndpointVariant) -> Self {
        self.assign_endpoint = Some(variant);
        self
    }

    /// Profile name currently selected, from CLI or env.
    pub fn profile_name(&self) -> Option<&String> {
        self.profile_name.as_ref()
    }

    fn has_complete_config(&self) -> bool {
        self.base_url.is_some() && self.username.is_some() && self.api_token.is_some()
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        if let Some(ref profile_name) = self.profile_missing
            && !self.has_complete_config()
        {
            return Err(ConfigError::ProfileNotFound(profile_name.clone()));
        }

        let base_url = self
            .base_url
            .as_deref()
            .map(validate_and_normalize_base_url)
            .transpose()?
            .ok_or(ConfigError::MissingBaseUrl)?;

        let auth = match (self.username, self.api_token) {
            (Some(username), Some(api_token)) => AuthConfig {
                username,
                api_token,
            },
            _ => return Err(ConfigError::MissingAuth),
        };

        let connection = ConnectionConfig {
            base_url,
            skip_verify: self.skip_verify.unwrap_or(false),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            assign_endpoint: self.assign_endpoint.unwrap_or_default(),
        };

        Self::validate_timeout(&connection)?;

        Ok(Config { connection, auth })
    }

    fn validate_timeout(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        Ok(())
    }

    // Internal accessors for the env and profile modules

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_config_path(&mut self, path: PathBuf) {
        self.config_path = Some(path);
    }

    pub(crate) fn set_profile_name(&mut self, name: String) {
        self.profile_name = Some(name);
    }

    pub(crate) fn set_profile_missing(&mut self, name: String) {
        self.profile_missing = Some(name);
    }

    pub(crate) fn fill_base_url(&mut self, url: String) {
        self.base_url.get_or_insert(url);
    }

    pub(crate) fn fill_username(&mut self, username: String) {
        self.username.get_or_insert(username);
    }

    pub(crate) fn fill_api_token(&mut self, token: SecretString) {
        self.api_token.get_or_insert(token);
    }

    pub(crate) fn fill_skip_verify(&mut self, skip: bool) {
        self.skip_verify.get_or_insert(skip);
    }

    pub(crate) fn fill_timeout(&mut self, timeout: Duration) {
        self.timeout.get_or_insert(timeout);
    }

    pub(crate) fn fill_assign_endpoint(&mut self, variant: RoleEndpointVariant) {
        self.assign_endpoint.get_or_insert(variant);
    }
}

/// Validates and normalizes a base URL string.
///
/// - Blank input counts as missing.
/// - Must parse as an absolute http(s) URL with a host.
/// - Trailing slashes are stripped.
fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "base_url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://jenkins.example.com): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: "host is required (e.g. https://jenkins.example.com)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
