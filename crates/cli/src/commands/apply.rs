//! Assign and unassign command implementation.
//!
//! Responsibilities:
//! - Resolve the desired role set from flags and role files.
//! - Apply it for one user and print the applied changes.
//! - List every failed change on stderr before returning the error.
//!
//! Does NOT handle:
//! - Direct REST API calls (handled by client crate).

use anyhow::Result;
use jenkins_role_client::{ApplyMode, ClientError};
use jenkins_role_config::Config;
use tracing::{info, warn};

use crate::args::RoleArgs;
use crate::commands::{build_client_from_config, load_role_set};
use crate::formatters::{OutputFormat, get_formatter, output_result};

pub async fn run(
    config: Config,
    user: &str,
    roles: RoleArgs,
    mode: ApplyMode,
    fail_fast: bool,
    metrics: bool,
    output_format: &str,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let roles = load_role_set(roles)?;

    if roles.is_empty() {
        warn!(user, mode = %mode, "No roles selected; nothing to apply");
    }
    info!(user, mode = %mode, roles = roles.len(), "Applying roles");

    let client = build_client_from_config(&config, fail_fast, metrics)?;

    let report = match client.apply(user, &roles, mode).await {
        Ok(report) => report,
        Err(err) => {
            if let ClientError::ApplyFailed { failures, .. } = &err {
                for failure in failures {
                    eprintln!("  {}", failure);
                }
            }
            return Err(err.into());
        }
    };

    let formatter = get_formatter(format);
    output_result(&formatter.format_apply_report(user, &report)?);

    Ok(())
}
