//! Error handling tests.
//!
//! This module tests error mapping for the role-strategy calls:
//! - HTTP error status codes (401, 403, 404, 500)
//! - Error body truncation
//! - Connection failures and timeouts
//! - Error categories
//!
//! # Invariants
//! - Each request is sent exactly once; nothing is retried
//!
//! # What this does NOT handle
//! - Failure policies across several roles (see apply_tests.rs)

mod common;

use std::time::Duration;

use common::*;
use jenkins_role_client::{
    ClientError, Credentials, ErrorCategory, JenkinsRoleClient, RoleCategory, RoleSet,
};
use secrecy::SecretString;

use wiremock::matchers::{method, path};

fn single_role() -> RoleSet {
    RoleSet::new().with_role(RoleCategory::Global, "admin")
}

/// Assign one role against a server answering `status` and return the inner error.
async fn assign_error(status: u16, body: &str) -> ClientError {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    match client.assign("alice", &single_role()).await {
        Err(ClientError::ApplyFailed { mut failures, .. }) => failures.remove(0).error,
        other => panic!("Expected ApplyFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unauthorized_access() {
    let err = assign_error(401, "Invalid password/token").await;

    assert!(
        matches!(err, ClientError::Unauthorized(_)),
        "Expected Unauthorized, got {:?}",
        err
    );
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_forbidden_access() {
    let err = assign_error(403, "alice is missing the Overall/Administer permission").await;

    assert!(matches!(err, ClientError::Forbidden(_)));
    assert_eq!(err.category(), ErrorCategory::Auth);
    assert!(err.to_string().contains("Overall/Administer"));
}

#[tokio::test]
async fn test_not_found() {
    let err = assign_error(404, "").await;

    assert!(matches!(err, ClientError::NotFound(_)));
    assert_eq!(err.category(), ErrorCategory::Server);
}

#[tokio::test]
async fn test_internal_server_error() {
    let err = assign_error(500, "java.lang.NullPointerException").await;

    match err {
        ClientError::ApiError {
            status, message, ..
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "java.lang.NullPointerException");
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_error_body_is_truncated() {
    let err = assign_error(500, &"x".repeat(5000)).await;

    match err {
        ClientError::ApiError { message, .. } => {
            assert!(message.chars().count() < 600, "message not truncated");
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_call_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/role-strategy/strategy/getAllRoles"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.fetch_user_roles("alice").await.unwrap_err();

    assert!(matches!(err, ClientError::ApiError { status: 503, .. }));
}

#[tokio::test]
async fn test_fetch_unauthorized_is_not_wrapped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.fetch_user_roles("alice").await.unwrap_err();

    assert!(matches!(err, ClientError::Unauthorized(_)));
}

#[tokio::test]
async fn test_connection_refused() {
    // Port 1 is privileged and never listened on in test environments.
    let client = JenkinsRoleClient::builder()
        .base_url("http://127.0.0.1:1".to_string())
        .credentials(Credentials::new(
            "alice",
            SecretString::new("token123".to_string().into()),
        ))
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.fetch_user_roles("alice").await.unwrap_err();

    assert!(
        matches!(err, ClientError::ConnectionRefused(_)),
        "Expected ConnectionRefused, got {:?}",
        err
    );
    assert_eq!(err.category(), ErrorCategory::Network);
}

#[tokio::test]
async fn test_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let client = JenkinsRoleClient::builder()
        .base_url(mock_server.uri())
        .credentials(Credentials::new(
            "alice",
            SecretString::new("token123".to_string().into()),
        ))
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let err = client.fetch_user_roles("alice").await.unwrap_err();

    assert!(
        matches!(err, ClientError::Timeout(_)),
        "Expected Timeout, got {:?}",
        err
    );
    assert_eq!(err.category(), ErrorCategory::Network);
}

#[tokio::test]
async fn test_apply_failed_takes_category_of_first_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.assign("alice", &single_role()).await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Auth);
}
