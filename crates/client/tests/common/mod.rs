//! Common test utilities for integration tests.
//!
//! # What this provides
//! - A client pointed at a wiremock server
//! - A matcher for individual multipart form fields
//! - A stateful stub of the role-strategy endpoints
//!
//! # What this does NOT handle
//! - Test-specific assertions or test logic

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use jenkins_role_client::{ApplyPolicy, AssignEndpoint, Credentials, JenkinsRoleClient};
use secrecy::SecretString;
use wiremock::{Match, Request, Respond};

#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// `Authorization` header value for alice:token123.
#[allow(dead_code)]
pub const ALICE_BASIC_AUTH: &str = "Basic YWxpY2U6dG9rZW4xMjM=";

/// Client for `server` authenticating as alice:token123.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> JenkinsRoleClient {
    client_with(server, AssignEndpoint::UserRole, ApplyPolicy::CollectAll)
}

#[allow(dead_code)]
pub fn client_with(
    server: &MockServer,
    endpoint: AssignEndpoint,
    policy: ApplyPolicy,
) -> JenkinsRoleClient {
    JenkinsRoleClient::builder()
        .base_url(server.uri())
        .credentials(Credentials::new(
            "alice",
            SecretString::new("token123".to_string().into()),
        ))
        .timeout(Duration::from_secs(5))
        .assign_endpoint(endpoint)
        .apply_policy(policy)
        .build()
        .expect("client should build")
}

/// Extract a text field from a multipart/form-data body.
#[allow(dead_code)]
pub fn form_field(body: &[u8], name: &str) -> Option<String> {
    let body = String::from_utf8_lossy(body);
    let marker = format!("name=\"{}\"", name);
    let start = body.find(&marker)?;
    let rest = &body[start + marker.len()..];
    let value_start = rest.find("\r\n\r\n")? + 4;
    let value = &rest[value_start..];
    let value_end = value.find("\r\n")?;
    Some(value[..value_end].to_string())
}

/// Matches requests whose multipart body has `name` set to `value`.
#[allow(dead_code)]
pub struct FormField(pub &'static str, pub &'static str);

impl Match for FormField {
    fn matches(&self, request: &Request) -> bool {
        form_field(&request.body, self.0).as_deref() == Some(self.1)
    }
}

/// In-memory role-strategy server: role type -> role name -> holders.
///
/// Assign/unassign requests mutate the state; `getAllRoles` renders it.
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct StatefulRoleStrategy {
    state: Arc<Mutex<BTreeMap<String, BTreeMap<String, Vec<String>>>>>,
}

#[allow(dead_code)]
impl StatefulRoleStrategy {
    pub fn with_role(self, role_type: &str, role: &str, holders: &[&str]) -> Self {
        self.state
            .lock()
            .unwrap()
            .entry(role_type.to_string())
            .or_default()
            .insert(
                role.to_string(),
                holders.iter().map(|h| h.to_string()).collect(),
            );
        self
    }

    pub fn holders(&self, role_type: &str, role: &str) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .get(role_type)
            .and_then(|roles| roles.get(role))
            .cloned()
            .unwrap_or_default()
    }
}

impl Respond for StatefulRoleStrategy {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let path = request.url.path().to_string();
        let mut state = self.state.lock().unwrap();

        if path.ends_with("/getAllRoles") {
            let role_type = request
                .url
                .query_pairs()
                .find(|(k, _)| k == "type")
                .map(|(_, v)| v.into_owned())
                .unwrap_or_else(|| "globalRoles".to_string());
            let listing = state.get(&role_type).cloned().unwrap_or_default();
            return ResponseTemplate::new(200).set_body_json(listing);
        }

        let role_type = form_field(&request.body, "type");
        let role_name = form_field(&request.body, "roleName");
        let user = form_field(&request.body, "user").or_else(|| form_field(&request.body, "sid"));
        let (Some(role_type), Some(role_name), Some(user)) = (role_type, role_name, user) else {
            return ResponseTemplate::new(400);
        };

        let Some(holders) = state
            .get_mut(&role_type)
            .and_then(|roles| roles.get_mut(&role_name))
        else {
            return ResponseTemplate::new(500).set_body_string("No such role");
        };

        if path.ends_with("/assignUserRole") || path.ends_with("/assignRole") {
            if !holders.contains(&user) {
                holders.push(user);
            }
        } else {
            holders.retain(|h| h != &user);
        }

        ResponseTemplate::new(200)
    }
}
