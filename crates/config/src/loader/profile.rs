//! Profile file loading for configuration.
//!
//! Responsibilities:
//! - Resolve the profile file location.
//! - Load a named profile from the JSON profile file.
//! - Apply profile settings to a ConfigLoader instance.
//!
//! Invariants:
//! - Profile values only fill settings that are still unset, so environment
//!   variables and explicit overrides always win regardless of call order.
//! - A missing file or missing profile is recorded on the loader and only
//!   reported by `build()` when the remaining sources are incomplete.

use std::path::{Path, PathBuf};

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{APP_NAME, CONFIG_FILE_NAME};
use crate::types::{ConfigFile, ProfileConfig};

/// Returns the default path to the profile file.
///
/// - Linux: `~/.config/jenkins-role/config.json`
/// - macOS: `~/Library/Application Support/jenkins-role/config.json`
/// - Windows: `%AppData%\jenkins-role\config\config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        directories::ProjectDirs::from("", "", APP_NAME).ok_or(ConfigError::ConfigDirUnavailable)?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Read and parse a profile file.
pub(crate) fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply profile configuration from the profile file to the loader.
pub fn apply_profile(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let profile_name = match loader.profile_name() {
        Some(name) => name.clone(),
        None => return Ok(()),
    };

    let config_path = match loader.config_path() {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "Profile file not found");
        loader.set_profile_missing(profile_name);
        return Ok(());
    }

    let file = read_config_file(&config_path)?;

    match file.profiles.get(&profile_name) {
        Some(profile) => {
            tracing::debug!(profile = %profile_name, "Applying profile");
            apply_profile_config(loader, profile);
        }
        None => loader.set_profile_missing(profile_name),
    }

    Ok(())
}

fn apply_profile_config(loader: &mut ConfigLoader, profile: &ProfileConfig) {
    if let Some(url) = &profile.base_url {
        loader.fill_base_url(url.clone());
    }
    if let Some(username) = &profile.username {
        loader.fill_username(username.clone());
    }
    if let Some(token) = &profile.api_token {
        loader.fill_api_token(token.clone());
    }
    if let Some(skip) = profile.skip_verify {
        loader.fill_skip_verify(skip);
    }
    if let Some(secs) = profile.timeout_seconds {
        loader.fill_timeout(std::time::Duration::from_secs(secs));
    }
    if let Some(variant) = profile.assign_endpoint {
        loader.fill_assign_endpoint(variant);
    }
}
