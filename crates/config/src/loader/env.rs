//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `JENKINS_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Loading from profile files (see profile.rs).
//! - Building the final Config (see builder.rs).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Values already set on the loader by explicit builder calls are not overwritten.
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_API_TOKEN, ENV_CONFIG_PATH, ENV_PROFILE, ENV_ROLE_ENDPOINT, ENV_SKIP_VERIFY, ENV_TIMEOUT,
    ENV_URL, ENV_USERNAME,
};
use crate::types::RoleEndpointVariant;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn invalid(var: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        var: var.to_string(),
        message: message.to_string(),
    }
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_URL) {
        loader.fill_base_url(url);
    }
    if let Some(username) = env_var_or_none(ENV_USERNAME) {
        loader.fill_username(username);
    }
    if let Some(token) = env_var_or_none(ENV_API_TOKEN) {
        loader.fill_api_token(SecretString::new(token.into()));
    }
    if let Some(skip) = env_var_or_none(ENV_SKIP_VERIFY) {
        let skip: bool = skip
            .parse()
            .map_err(|_| invalid(ENV_SKIP_VERIFY, "must be true or false"))?;
        loader.fill_skip_verify(skip);
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout
            .parse()
            .map_err(|_| invalid(ENV_TIMEOUT, "must be a number"))?;
        loader.fill_timeout(Duration::from_secs(secs));
    }
    if let Some(variant) = env_var_or_none(ENV_ROLE_ENDPOINT) {
        let variant: RoleEndpointVariant = variant
            .parse()
            .map_err(|e: String| invalid(ENV_ROLE_ENDPOINT, &e))?;
        loader.fill_assign_endpoint(variant);
    }

    // Config path and profile name only if not already set via CLI
    if loader.config_path().is_none()
        && let Some(config_path) = env_var_or_none(ENV_CONFIG_PATH)
    {
        loader.set_config_path(std::path::PathBuf::from(config_path));
    }
    if loader.profile_name().is_none()
        && let Some(profile) = env_var_or_none(ENV_PROFILE)
    {
        loader.set_profile_name(profile);
    }

    Ok(())
}
