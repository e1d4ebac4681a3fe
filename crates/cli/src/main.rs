//! jenkins-role - Command-line interface for Jenkins role-strategy roles.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve connection settings from flags, `JENKINS_*` env vars and profiles.
//! - Execute role commands via the shared client library.
//! - Start the Prometheus metrics exporter when `--metrics-bind` is given.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use std::time::Duration;

use anyhow::Result;
use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use jenkins_role_client::MetricsExporter;
use jenkins_role_config::{Config, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Returns the value unless it is missing or whitespace-only.
///
/// Clap fills these from `JENKINS_*` env vars too, so blank env values must
/// count as unset here just as they do in the loader.
fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Resolve configuration: CLI flags, then env vars, then the selected profile.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();

    // Blank values are ignored to allow fallback to env var
    if let Some(ref path) = cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }
    if let Some(profile_name) = non_blank(&cli.profile) {
        loader = loader.with_profile_name(profile_name);
    }

    if let Some(url) = non_blank(&cli.url) {
        loader = loader.with_base_url(url);
    }
    if let Some(username) = non_blank(&cli.username) {
        loader = loader.with_username(username);
    }
    if let Some(token) = non_blank(&cli.api_token) {
        loader = loader.with_api_token(token);
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }
    if let Some(endpoint) = cli.endpoint {
        loader = loader.with_assign_endpoint(endpoint);
    }

    loader = loader.from_env()?;
    if loader.profile_name().is_some() {
        loader = loader.from_profile()?;
    }

    Ok(loader.build()?)
}

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    // Initialize metrics exporter if --metrics-bind is provided
    let metrics_exporter = match non_blank(&cli.metrics_bind) {
        Some(bind_addr) => match MetricsExporter::install(&bind_addr) {
            Ok(exporter) => Some(exporter),
            Err(e) => {
                eprintln!("Failed to start metrics exporter: {}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        },
        None => None,
    };

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let exit_code = match run_command(cli, config, metrics_exporter.is_some()).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
