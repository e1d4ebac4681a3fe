//! Fetch tests for `fetch_user_roles`.
//!
//! This module tests reading a user's roles back from `getAllRoles`:
//! - One GET per category with the category token as `type`
//! - Exact holder matching, both plain and `{type, sid}` holder shapes
//! - Malformed listings surface as `InvalidResponse`
//! - Apply/fetch consistency against a stateful server
//!
//! # What this does NOT handle
//! - Transport or status error mapping (see error_tests.rs)

mod common;

use common::*;
use jenkins_role_client::{ClientError, ErrorCategory, RoleCategory, RoleSet};

use wiremock::matchers::{header, method, path, query_param};

const GET_ALL_ROLES: &str = "/role-strategy/strategy/getAllRoles";

async fn mount_listing(mock_server: &MockServer, token: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(GET_ALL_ROLES))
        .and(query_param("type", token))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_fetch_user_roles_across_categories() {
    let mock_server = MockServer::start().await;

    mount_listing(
        &mock_server,
        "globalRoles",
        serde_json::json!({"admin": ["alice"], "reader": ["bob"]}),
    )
    .await;
    mount_listing(
        &mock_server,
        "projectRoles",
        serde_json::json!({"dev": ["alice", "bob"]}),
    )
    .await;
    mount_listing(&mock_server, "slaveRoles", serde_json::json!({})).await;

    let client = client_for(&mock_server);
    let roles = client.fetch_user_roles("alice").await.unwrap();

    assert_eq!(roles.global, vec!["admin"]);
    assert_eq!(roles.item, vec!["dev"]);
    assert!(roles.node.is_empty());
}

#[tokio::test]
async fn test_fetch_sends_basic_auth() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GET_ALL_ROLES))
        .and(header("authorization", ALICE_BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let roles = client.fetch_user_roles("alice").await.unwrap();
    assert!(roles.is_empty());
}

#[tokio::test]
async fn test_fetch_matches_holders_exactly() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GET_ALL_ROLES))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "prefix": ["alice2"],
            "case": ["Alice"],
            "exact": ["alice"]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let roles = client.fetch_user_roles("alice").await.unwrap();

    assert_eq!(roles.global, vec!["exact"]);
    assert_eq!(roles.item, vec!["exact"]);
    assert_eq!(roles.node, vec!["exact"]);
}

#[tokio::test]
async fn test_fetch_accepts_typed_holder_entries() {
    let mock_server = MockServer::start().await;

    mount_listing(
        &mock_server,
        "globalRoles",
        serde_json::json!({
            "admin": [{"type": "USER", "sid": "alice"}],
            "ops": [{"type": "GROUP", "sid": "ops-team"}]
        }),
    )
    .await;
    mount_listing(&mock_server, "projectRoles", serde_json::json!({})).await;
    mount_listing(&mock_server, "slaveRoles", serde_json::json!({})).await;

    let client = client_for(&mock_server);
    let roles = client.fetch_user_roles("alice").await.unwrap();

    assert_eq!(roles.global, vec!["admin"]);
}

#[tokio::test]
async fn test_fetch_ignores_group_holding_user_sid() {
    let mock_server = MockServer::start().await;

    mount_listing(
        &mock_server,
        "globalRoles",
        serde_json::json!({
            "admin": [{"type": "GROUP", "sid": "alice"}],
            "reader": [{"type": "EITHER", "sid": "alice"}]
        }),
    )
    .await;
    mount_listing(
        &mock_server,
        "projectRoles",
        serde_json::json!({"dev": [{"type": "GROUP", "sid": "alice"}, "alice"]}),
    )
    .await;
    mount_listing(&mock_server, "slaveRoles", serde_json::json!({})).await;

    let client = client_for(&mock_server);
    let roles = client.fetch_user_roles("alice").await.unwrap();

    assert_eq!(roles.global, vec!["reader"]);
    assert_eq!(roles.item, vec!["dev"]);
    assert!(roles.node.is_empty());
}

#[tokio::test]
async fn test_fetch_returns_role_names_sorted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GET_ALL_ROLES))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "zeta": ["alice"],
            "alpha": ["alice"],
            "mid": ["alice"]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let roles = client.fetch_user_roles("alice").await.unwrap();

    assert_eq!(roles.global, vec!["alpha", "mid", "zeta"]);
}

#[tokio::test]
async fn test_fetch_malformed_listing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GET_ALL_ROLES))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.fetch_user_roles("alice").await.unwrap_err();

    assert!(
        matches!(err, ClientError::InvalidResponse(_)),
        "Expected InvalidResponse, got {:?}",
        err
    );
    assert_eq!(err.category(), ErrorCategory::MalformedResponse);
}

#[tokio::test]
async fn test_fetch_listing_with_wrong_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GET_ALL_ROLES))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!(["admin", "reader"])),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.fetch_user_roles("alice").await.unwrap_err();

    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_fetch_stops_at_first_failing_category() {
    let mock_server = MockServer::start().await;

    mount_listing(&mock_server, "globalRoles", serde_json::json!({})).await;

    Mock::given(method("GET"))
        .and(path(GET_ALL_ROLES))
        .and(query_param("type", "projectRoles"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal error"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(GET_ALL_ROLES))
        .and(query_param("type", "slaveRoles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.fetch_user_roles("alice").await.unwrap_err();

    assert!(matches!(err, ClientError::ApiError { status: 500, .. }));
}

#[tokio::test]
async fn test_assign_then_fetch_reflects_server_state() {
    let mock_server = MockServer::start().await;
    let strategy = StatefulRoleStrategy::default()
        .with_role("globalRoles", "admin", &[])
        .with_role("globalRoles", "reader", &["bob"])
        .with_role("projectRoles", "dev", &[]);

    Mock::given(wiremock::matchers::any())
        .respond_with(strategy.clone())
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let desired = RoleSet::new()
        .with_role(RoleCategory::Global, "admin")
        .with_role(RoleCategory::Item, "dev");

    client.assign("alice", &desired).await.unwrap();
    assert_eq!(strategy.holders("globalRoles", "admin"), vec!["alice"]);

    let fetched = client.fetch_user_roles("alice").await.unwrap();
    assert_eq!(fetched, desired);
}

#[tokio::test]
async fn test_unassign_then_fetch_drops_roles() {
    let mock_server = MockServer::start().await;
    let strategy = StatefulRoleStrategy::default()
        .with_role("globalRoles", "admin", &["alice", "bob"])
        .with_role("slaveRoles", "agents", &["alice"]);

    Mock::given(wiremock::matchers::any())
        .respond_with(strategy.clone())
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let held = client.fetch_user_roles("alice").await.unwrap();
    assert_eq!(held.len(), 2);

    client.unassign("alice", &held).await.unwrap();

    let after = client.fetch_user_roles("alice").await.unwrap();
    assert!(after.is_empty());
    assert_eq!(strategy.holders("globalRoles", "admin"), vec!["bob"]);
}
