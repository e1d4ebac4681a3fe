//! Configuration types for the Jenkins role binding tools.
//!
//! Responsibilities:
//! - Define the resolved connection and authentication settings.
//! - Define the on-disk profile file shape.
//! - Handle serialization of secret values.
//!
//! Does NOT handle:
//! - Loading or merging configuration sources (see `loader`).
//! - Making HTTP calls (see the client crate).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Same as `secret_string`, for optional fields in profile files.
mod secret_string_opt {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(secret: &Option<SecretString>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret
            .as_ref()
            .map(|s| s.expose_secret().to_string())
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.map(|s| SecretString::new(s.into())))
    }
}

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Which role-strategy endpoint pair is used to assign and unassign roles.
///
/// `UserRole` targets `assignUserRole`/`unassignUserRole` and identifies the
/// user with a `user` form field. `Sid` targets `assignRole`/`unassignRole`
/// with a `sid` field, which older plugin releases expose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoleEndpointVariant {
    #[default]
    UserRole,
    Sid,
}

impl RoleEndpointVariant {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserRole => "user-role",
            Self::Sid => "sid",
        }
    }
}

impl fmt::Display for RoleEndpointVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleEndpointVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user-role" | "user_role" | "user" => Ok(Self::UserRole),
            "sid" => Ok(Self::Sid),
            other => Err(format!("expected 'user-role' or 'sid', got '{other}'")),
        }
    }
}

/// Basic authentication credentials for the Jenkins server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Jenkins user the calls are made as.
    pub username: String,
    /// API token (or password) for `username`.
    #[serde(with = "secret_string")]
    pub api_token: SecretString,
}

/// Connection configuration for the Jenkins server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the Jenkins server, without a trailing slash.
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates).
    pub skip_verify: bool,
    /// Per-request timeout.
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Assign/unassign endpoint pair to use.
    pub assign_endpoint: RoleEndpointVariant,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config with default connection settings.
    pub fn new(base_url: String, username: String, api_token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                skip_verify: false,
                timeout: Duration::from_secs(crate::constants::DEFAULT_TIMEOUT_SECS),
                assign_endpoint: RoleEndpointVariant::default(),
            },
            auth: AuthConfig {
                username,
                api_token,
            },
        }
    }
}

/// A named connection profile as stored in the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(
        default,
        with = "secret_string_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_token: Option<SecretString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_verify: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assign_endpoint: Option<RoleEndpointVariant>,
}

/// Top-level config file: a set of named profiles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileConfig>,
}
