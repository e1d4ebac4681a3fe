//! Configuration management for the Jenkins role binding tools.
//!
//! This crate provides types and loaders for the Jenkins connection settings
//! (server URL, username, API token) from profile files, environment
//! variables and explicit overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path, env_var_or_none};
pub use types::{
    AuthConfig, Config, ConfigFile, ConnectionConfig, ProfileConfig, RoleEndpointVariant,
};
