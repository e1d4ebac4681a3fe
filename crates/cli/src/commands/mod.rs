//! Command implementations and shared helpers.
//!
//! Responsibilities:
//! - Build a `JenkinsRoleClient` from the resolved configuration, with a
//!   metrics collector when an exporter is running.
//! - Turn role selector flags and role files into a `RoleSet`.
//!
//! Does NOT handle:
//! - Argument parsing (see `args`) or routing (see `dispatch`).

pub mod apply;
pub mod import;

use std::fs;

use anyhow::{Context, Result};
use jenkins_role_client::{
    ApplyPolicy, JenkinsRoleClient, MetricsCollector, RoleCategory, RoleSet,
};
use jenkins_role_config::Config;

use crate::args::RoleArgs;

/// Build a client from config, choosing the apply failure policy.
///
/// `metrics` should only be set once a recorder is installed.
pub fn build_client_from_config(
    config: &Config,
    fail_fast: bool,
    metrics: bool,
) -> Result<JenkinsRoleClient> {
    let policy = if fail_fast {
        ApplyPolicy::FailFast
    } else {
        ApplyPolicy::CollectAll
    };

    let mut builder = JenkinsRoleClient::builder()
        .from_config(config)
        .apply_policy(policy);
    if metrics {
        builder = builder.metrics(MetricsCollector::new());
    }

    Ok(builder.build()?)
}

/// Collect the desired roles: the roles file first, then the flag lists.
///
/// Names from both sources are trimmed and blank names are dropped.
pub fn load_role_set(args: RoleArgs) -> Result<RoleSet> {
    let from_file = match &args.roles_file {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read roles file {}", path.display()))?;
            serde_json::from_str::<RoleSet>(&content)
                .with_context(|| format!("Failed to parse roles file {}", path.display()))?
        }
        None => RoleSet::new(),
    };

    let flags = [
        (RoleCategory::Global, args.global),
        (RoleCategory::Item, args.item),
        (RoleCategory::Node, args.node),
    ];
    let mut roles = RoleSet::new();
    for (category, names) in &flags {
        let file_names = from_file.roles(*category).iter();
        for name in file_names.chain(names.iter()) {
            let name = name.trim();
            if !name.is_empty() {
                roles.push(*category, name);
            }
        }
    }

    Ok(roles)
}
