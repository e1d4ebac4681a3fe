//! JSON formatter implementation.

use anyhow::Result;
use jenkins_role_client::{ApplyReport, RoleBinding, RoleSet};
use serde_json::json;

use super::Formatter;

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_role_set(&self, user: &str, roles: &RoleSet) -> Result<String> {
        Ok(serde_json::to_string_pretty(&json!({
            "user": user,
            "roles": roles,
        }))?)
    }

    fn format_binding(&self, binding: &RoleBinding) -> Result<String> {
        Ok(serde_json::to_string_pretty(binding)?)
    }

    fn format_apply_report(&self, user: &str, report: &ApplyReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(&json!({
            "user": user,
            "mode": report.mode,
            "applied": report.applied,
        }))?)
    }
}
