//! Shared test utilities for jenkins-role integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Ensure consistent test environment setup (credentials, base URLs).
//!
//! Invariants / Assumptions:
//! - `JENKINS_USERNAME`/`JENKINS_API_TOKEN` are set to alice/token123 unless overridden.

use assert_cmd::Command;

/// Returns a hermetic `jenkins-role` command for integration testing.
pub fn jenkins_role_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("jenkins-role");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env("JENKINS_USERNAME", "alice");
    cmd.env("JENKINS_API_TOKEN", "token123");

    // Clear potential host leakage
    cmd.env_remove("JENKINS_URL")
        .env_remove("JENKINS_PROFILE")
        .env_remove("JENKINS_CONFIG_PATH")
        .env_remove("JENKINS_TIMEOUT")
        .env_remove("JENKINS_SKIP_VERIFY")
        .env_remove("JENKINS_ROLE_ENDPOINT")
        .env_remove("JENKINS_METRICS_BIND")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `jenkins-role` command with a specific base URL.
#[allow(dead_code)]
pub fn jenkins_role_cmd_with_url(base_url: &str) -> Command {
    let mut cmd = jenkins_role_cmd();
    cmd.env("JENKINS_URL", base_url);
    cmd
}
