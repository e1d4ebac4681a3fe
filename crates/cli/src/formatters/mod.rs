//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide JSON and table output for role sets, bindings and apply reports.
//!
//! Does NOT handle:
//! - Choosing what to fetch or apply (see `commands`).
//!
//! Invariants:
//! - JSON output is always a valid document, including for empty results.
//! - Table output prints a human message instead of an empty table.

use anyhow::Result;
use jenkins_role_client::{ApplyReport, RoleBinding, RoleSet};

mod json;
mod table;

pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, table", s),
        }
    }
}

/// Formatter trait for the CLI's output types.
pub trait Formatter {
    /// Format the roles a user holds.
    fn format_role_set(&self, user: &str, roles: &RoleSet) -> Result<String>;

    /// Format an imported role binding.
    fn format_binding(&self, binding: &RoleBinding) -> Result<String>;

    /// Format the changes applied by assign/unassign.
    fn format_apply_report(&self, user: &str, report: &ApplyReport) -> Result<String>;
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}

/// Print formatted output to stdout.
pub fn output_result(output: &str) {
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}
