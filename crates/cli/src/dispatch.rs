//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use jenkins_role_client::ApplyMode;
use jenkins_role_config::Config;

use crate::args::{Cli, Commands};
use crate::commands;

/// `metrics` is true when a metrics exporter was installed for this run.
pub(crate) async fn run_command(cli: Cli, config: Config, metrics: bool) -> Result<()> {
    match cli.command {
        Commands::Assign { user, roles } => {
            commands::apply::run(
                config,
                &user,
                roles,
                ApplyMode::Assign,
                cli.fail_fast,
                metrics,
                &cli.output,
            )
            .await
        }
        Commands::Unassign { user, roles } => {
            commands::apply::run(
                config,
                &user,
                roles,
                ApplyMode::Unassign,
                cli.fail_fast,
                metrics,
                &cli.output,
            )
            .await
        }
        Commands::Import { user } => {
            commands::import::run_import(config, &user, metrics, &cli.output).await
        }
        Commands::Show { user } => {
            commands::import::run_show(config, &user, metrics, &cli.output).await
        }
    }
}
