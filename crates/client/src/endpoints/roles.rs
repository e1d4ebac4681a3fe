//! Role-strategy plugin endpoints.

use std::time::Duration;

use jenkins_role_config::RoleEndpointVariant;
use reqwest::multipart::Form;
use reqwest::{Client, Url};

use crate::auth::Credentials;
use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::{ApplyMode, RoleAssignment, RoleCategory, RoleListing};

/// Path of the role listing endpoint.
pub const GET_ALL_ROLES_PATH: &str = "/role-strategy/strategy/getAllRoles";

/// Assign/unassign endpoint pair and the form field naming the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssignEndpoint {
    /// `assignUserRole` / `unassignUserRole` with a `user` field.
    #[default]
    UserRole,
    /// `assignRole` / `unassignRole` with a `sid` field.
    Sid,
}

impl AssignEndpoint {
    /// Endpoint path for `mode`.
    pub const fn path(self, mode: ApplyMode) -> &'static str {
        match (self, mode) {
            (Self::UserRole, ApplyMode::Assign) => "/role-strategy/strategy/assignUserRole",
            (Self::UserRole, ApplyMode::Unassign) => "/role-strategy/strategy/unassignUserRole",
            (Self::Sid, ApplyMode::Assign) => "/role-strategy/strategy/assignRole",
            (Self::Sid, ApplyMode::Unassign) => "/role-strategy/strategy/unassignRole",
        }
    }

    /// Form field carrying the user id.
    pub const fn user_field(self) -> &'static str {
        match self {
            Self::UserRole => "user",
            Self::Sid => "sid",
        }
    }
}

impl From<RoleEndpointVariant> for AssignEndpoint {
    fn from(variant: RoleEndpointVariant) -> Self {
        match variant {
            RoleEndpointVariant::UserRole => Self::UserRole,
            RoleEndpointVariant::Sid => Self::Sid,
        }
    }
}

fn endpoint_url(base_url: &str, path: &str) -> Result<Url> {
    Url::parse(&format!("{}{}", base_url, path))
        .map_err(|e| ClientError::InvalidUrl(format!("Invalid base URL '{}': {}", base_url, e)))
}

/// Assign or unassign one role.
///
/// Sends a multipart POST with `type`, `roleName` and the user field.
#[allow(clippy::too_many_arguments)]
pub async fn post_role_change(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    endpoint: AssignEndpoint,
    mode: ApplyMode,
    assignment: &RoleAssignment,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    let path = endpoint.path(mode);
    let url = endpoint_url(base_url, path)?;

    let form = Form::new()
        .text("type", assignment.category.server_token())
        .text("roleName", assignment.role_name.clone())
        .text(endpoint.user_field(), assignment.user_id.clone());

    let builder = credentials.apply(client.post(url)).multipart(form);
    send_request(builder, path, "POST", timeout, metrics).await?;

    Ok(())
}

/// Fetch the role listing for one category.
pub async fn get_all_roles(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    category: RoleCategory,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<RoleListing> {
    let url = endpoint_url(base_url, GET_ALL_ROLES_PATH)?;

    let builder = credentials
        .apply(client.get(url))
        .query(&[("type", category.server_token())]);
    let response = send_request(builder, GET_ALL_ROLES_PATH, "GET", timeout, metrics).await?;

    let body = response
        .text()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to read response body: {e}")))?;

    serde_json::from_str(&body).map_err(|e| {
        ClientError::InvalidResponse(format!(
            "Failed to decode {} listing: {e}",
            category.server_token()
        ))
    })
}
