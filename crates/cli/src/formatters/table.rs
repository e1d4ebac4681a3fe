//! Table formatter implementation.
//!
//! Columns are tab-separated for consistent alignment in standard terminals.

use anyhow::Result;
use jenkins_role_client::{ApplyMode, ApplyReport, RoleBinding, RoleSet};

use super::Formatter;

/// Table formatter.
pub struct TableFormatter;

fn role_rows(roles: &RoleSet) -> String {
    let mut output = String::from("CATEGORY\tROLE\n");
    for (category, role) in roles.iter() {
        output.push_str(&format!("{}\t{}\n", category, role));
    }
    output
}

impl Formatter for TableFormatter {
    fn format_role_set(&self, user: &str, roles: &RoleSet) -> Result<String> {
        if roles.is_empty() {
            return Ok(format!("No roles found for {}.\n", user));
        }
        Ok(role_rows(roles))
    }

    fn format_binding(&self, binding: &RoleBinding) -> Result<String> {
        let mut output = format!("ID: {}\nUser: {}\n", binding.id, binding.user_id);
        if binding.roles.is_empty() {
            output.push_str("Roles: none\n");
        } else {
            output.push('\n');
            output.push_str(&role_rows(&binding.roles));
        }
        Ok(output)
    }

    fn format_apply_report(&self, user: &str, report: &ApplyReport) -> Result<String> {
        if report.is_empty() {
            return Ok("No role changes requested.\n".to_string());
        }

        let verb = match report.mode {
            ApplyMode::Assign => "Assigned",
            ApplyMode::Unassign => "Unassigned",
        };
        let preposition = match report.mode {
            ApplyMode::Assign => "to",
            ApplyMode::Unassign => "from",
        };

        let mut output = format!(
            "{} {} role(s) {} {}:\n",
            verb,
            report.applied.len(),
            preposition,
            user
        );
        for assignment in &report.applied {
            output.push_str(&format!(
                "  {}:{}\n",
                assignment.category, assignment.role_name
            ));
        }
        Ok(output)
    }
}
