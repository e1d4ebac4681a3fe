//! Centralized constants for the Jenkins role binding workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Files & Environment
// =============================================================================

/// Application name used for the platform config directory.
pub const APP_NAME: &str = "jenkins-role";

/// File name of the profile file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable holding the Jenkins base URL.
pub const ENV_URL: &str = "JENKINS_URL";

/// Environment variable holding the Jenkins username.
pub const ENV_USERNAME: &str = "JENKINS_USERNAME";

/// Environment variable holding the Jenkins API token.
pub const ENV_API_TOKEN: &str = "JENKINS_API_TOKEN";

/// Environment variable holding the request timeout in seconds.
pub const ENV_TIMEOUT: &str = "JENKINS_TIMEOUT";

/// Environment variable toggling TLS verification.
pub const ENV_SKIP_VERIFY: &str = "JENKINS_SKIP_VERIFY";

/// Environment variable selecting the assign endpoint variant.
pub const ENV_ROLE_ENDPOINT: &str = "JENKINS_ROLE_ENDPOINT";

/// Environment variable naming the profile to load.
pub const ENV_PROFILE: &str = "JENKINS_PROFILE";

/// Environment variable overriding the profile file location.
pub const ENV_CONFIG_PATH: &str = "JENKINS_CONFIG_PATH";
