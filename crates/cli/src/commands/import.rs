//! Import and show command implementation.
//!
//! Responsibilities:
//! - Import a user's current roles as a role binding.
//! - Show the roles a user currently holds.
//!
//! Does NOT handle:
//! - Persisting the imported binding.

use anyhow::Result;
use jenkins_role_client::RoleBindingResource;
use jenkins_role_config::Config;
use tracing::info;

use crate::commands::build_client_from_config;
use crate::formatters::{OutputFormat, get_formatter, output_result};

pub async fn run_import(
    config: Config,
    user: &str,
    metrics: bool,
    output_format: &str,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    info!(user, "Importing role binding");

    let client = build_client_from_config(&config, false, metrics)?;
    let binding = RoleBindingResource::new(&client).import(user).await?;

    let formatter = get_formatter(format);
    output_result(&formatter.format_binding(&binding)?);

    Ok(())
}

pub async fn run_show(
    config: Config,
    user: &str,
    metrics: bool,
    output_format: &str,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    info!(user, "Fetching roles");

    let client = build_client_from_config(&config, false, metrics)?;
    let roles = client.fetch_user_roles(user).await?;

    let formatter = get_formatter(format);
    output_result(&formatter.format_role_set(user, &roles)?);

    Ok(())
}
