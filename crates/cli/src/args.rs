//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not build the configuration (see `main()`).

use clap::{Args, Parser, Subcommand};
use jenkins_role_config::RoleEndpointVariant;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jenkins-role")]
#[command(about = "Assign and inspect Jenkins role-strategy roles", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  jenkins-role assign alice --global admin,reader --item dev\n  jenkins-role unassign alice --roles-file roles.json\n  jenkins-role --output json import alice\n  jenkins-role --profile prod show alice\n"
)]
pub struct Cli {
    /// Base URL of the Jenkins server (e.g., https://jenkins.example.com)
    #[arg(long, global = true, env = "JENKINS_URL")]
    pub url: Option<String>,

    /// Jenkins username
    #[arg(short, long, global = true, env = "JENKINS_USERNAME")]
    pub username: Option<String>,

    /// Jenkins API token for the username
    #[arg(
        short = 't',
        long,
        global = true,
        env = "JENKINS_API_TOKEN",
        hide_env_values = true
    )]
    pub api_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true)]
    pub skip_verify: bool,

    /// Profile name to load from config file
    #[arg(long, global = true, env = "JENKINS_PROFILE")]
    pub profile: Option<String>,

    /// Path to a custom configuration file (overrides default location)
    #[arg(long, global = true, env = "JENKINS_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Assign/unassign endpoint pair (user-role or sid)
    #[arg(long, global = true, value_name = "VARIANT")]
    pub endpoint: Option<RoleEndpointVariant>,

    /// Stop at the first failing role change instead of attempting all
    #[arg(long, global = true)]
    pub fail_fast: bool,

    /// Output format (json, table)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Serve Prometheus metrics on this address (e.g., 127.0.0.1:9090)
    ///
    /// When set, request metrics are exposed at /metrics for the lifetime of the command.
    #[arg(long, global = true, env = "JENKINS_METRICS_BIND", value_name = "ADDR")]
    pub metrics_bind: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assign roles to a user
    Assign {
        /// User id (Jenkins SID) to grant roles to
        user: String,

        #[command(flatten)]
        roles: RoleArgs,
    },

    /// Unassign roles from a user
    Unassign {
        /// User id (Jenkins SID) to revoke roles from
        user: String,

        #[command(flatten)]
        roles: RoleArgs,
    },

    /// Import a user's current roles as a role binding
    Import {
        /// User id (Jenkins SID) to import
        user: String,
    },

    /// Show the roles a user currently holds
    Show {
        /// User id (Jenkins SID) to look up
        user: String,
    },
}

/// Role selectors shared by `assign` and `unassign`.
#[derive(Debug, Default, Args)]
pub struct RoleArgs {
    /// Global role names (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub global: Vec<String>,

    /// Item (project) role names (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub item: Vec<String>,

    /// Node (agent) role names (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub node: Vec<String>,

    /// JSON file with `global`, `item` and `node` role lists
    #[arg(long, value_name = "FILE")]
    pub roles_file: Option<PathBuf>,
}
