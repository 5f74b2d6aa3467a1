//! Integration tests for the admin authorization pipeline.

mod common;

use http::StatusCode;

use common::{StubIdentityProvider, SUPER_ADMIN_EMAIL, TestApp};

#[tokio::test]
async fn health_is_public() {
    let app = TestApp::new(StubIdentityProvider::new());

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let app = TestApp::new(StubIdentityProvider::new());

    let response = app.request("GET", "/api/admin/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn unknown_token_is_unauthorized() {
    let app = TestApp::new(StubIdentityProvider::new());

    let response = app
        .request("GET", "/api/admin/me", None, Some("bogus"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_authorization_header_is_unauthorized() {
    let app = TestApp::new(StubIdentityProvider::new());

    let request = http::Request::builder()
        .method("GET")
        .uri("/api/admin/me")
        .header("authorization", "Basic dXNlcjpwYXNz")
        .body(axum::body::Body::empty())
        .expect("request");

    let response = tower::ServiceExt::oneshot(app.router.clone(), request)
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn bootstrap_admin_reaches_the_admin_surface() {
    let app = TestApp::new(
        StubIdentityProvider::new().with_identity("root-token", SUPER_ADMIN_EMAIL),
    );

    let response = app
        .request("GET", "/api/admin/me", None, Some("root-token"))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["is_admin"], true);

    let roles = response.body["data"]["roles"]
        .as_array()
        .expect("roles array")
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect::<Vec<_>>();
    assert!(roles.contains(&"admin".to_string()));
    assert!(roles.contains(&"admin_manager".to_string()));
    assert!(!roles.contains(&"super_admin".to_string()));
}

#[tokio::test]
async fn bootstrap_matching_ignores_email_case() {
    let app = TestApp::new(
        StubIdentityProvider::new().with_identity("root-token", "ROOT@shop.test"),
    );

    let response = app
        .request("GET", "/api/admin/me", None, Some("root-token"))
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn non_admin_is_forbidden_not_errored() {
    let app = TestApp::new(
        StubIdentityProvider::new().with_identity("shopper-token", "shopper@shop.test"),
    );

    // The database is unreachable, so every role source degrades to empty.
    // The caller must see a clean 403, never a 500.
    let response = app
        .request("GET", "/api/admin/me", None, Some("shopper-token"))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["message"], "Insufficient privileges");
}

#[tokio::test]
async fn bootstrap_admin_cannot_manage_roles() {
    let app = TestApp::new(
        StubIdentityProvider::new().with_identity("root-token", SUPER_ADMIN_EMAIL),
    );

    let response = app
        .request("GET", "/api/admin/roles", None, Some("root-token"))
        .await;

    // Bootstrap grants admin_manager, not super_admin.
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn role_mutation_requires_super_admin() {
    let app = TestApp::new(
        StubIdentityProvider::new().with_identity("shopper-token", "shopper@shop.test"),
    );

    let target = uuid::Uuid::new_v4();
    let response = app
        .request(
            "PUT",
            &format!("/api/admin/users/{target}/roles"),
            Some(serde_json::json!({ "roles": ["order_manager"] })),
            Some("shopper-token"),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn malformed_role_payload_is_a_validation_error() {
    let app = TestApp::new(
        StubIdentityProvider::new().with_identity("root-token", SUPER_ADMIN_EMAIL),
    );

    // `roles` must be an array; a bare string has to come back as a 400
    // in the error envelope, not axum's plain-text 422.
    let target = uuid::Uuid::new_v4();
    let response = app
        .request(
            "PUT",
            &format!("/api/admin/users/{target}/roles"),
            Some(serde_json::json!({ "roles": "order_manager" })),
            Some("root-token"),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn audit_trail_denied_without_audit_roles() {
    let app = TestApp::new(
        StubIdentityProvider::new().with_identity("shopper-token", "shopper@shop.test"),
    );

    let response = app
        .request("GET", "/api/admin/audit-logs", None, Some("shopper-token"))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn forbidden_responses_do_not_name_required_roles() {
    let app = TestApp::new(
        StubIdentityProvider::new().with_identity("root-token", SUPER_ADMIN_EMAIL),
    );

    let response = app
        .request("GET", "/api/admin/roles", None, Some("root-token"))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["message"], "Insufficient privileges");
}
