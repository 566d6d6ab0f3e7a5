//! Integration tests for the authentication flow.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use uuid::Uuid;

use crate::helpers::{PASSWORD, TestApp};

#[tokio::test]
async fn test_register_returns_user_without_hash() {
    let app = TestApp::new();

    let response = app.register("  A@X.com ").await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.data()["email"], "a@x.com");
    assert_eq!(response.data()["role"], "member");
    assert!(response.data().get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new();
    app.register("a@x.com").await;

    let response = app.register("A@x.com").await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.error_code(), "CONFLICT");
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/auth/register",
            Some(json!({
                "email": "a@x.com",
                "display_name": "A",
                "password": "short",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new();
    app.register("a@x.com").await;

    let wrong_password = app.login("a@x.com", "wrongpassword").await;
    let unknown_email = app.login("nobody@x.com", PASSWORD).await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
    assert_eq!(wrong_password.error_code(), "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_login_returns_token_pair() {
    let app = TestApp::new();
    app.register("a@x.com").await;

    let response = app.login("a@x.com", PASSWORD).await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert!(data["access_token"].as_str().is_some());
    assert_eq!(data["refresh_token"].as_str().map(str::len), Some(64));
    assert_eq!(data["token_type"], "Bearer");
    assert_eq!(data["expires_in"], 15 * 60);
    assert_eq!(data["user"]["email"], "a@x.com");
}

#[tokio::test]
async fn test_missing_and_malformed_authorization_differ() {
    let app = TestApp::new();

    let missing = app.request("GET", "/api/v1/projects", None, None).await;

    let malformed = app
        .send(
            Request::builder()
                .method("GET")
                .uri("/api/v1/projects")
                .header("Authorization", "Token abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    let invalid = app
        .request("GET", "/api/v1/projects", None, Some("not.a.jwt"))
        .await;

    for response in [&missing, &malformed, &invalid] {
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.error_code(), "UNAUTHORIZED");
    }
    assert_ne!(
        missing.body["error"]["message"],
        malformed.body["error"]["message"]
    );
}

#[tokio::test]
async fn test_refresh_rotates_and_rejects_reuse() {
    let app = TestApp::new();
    let session = app.session("a@x.com").await;

    let first = app
        .request(
            "POST",
            "/api/v1/auth/refresh",
            Some(json!({ "refresh_token": session.refresh_token })),
            None,
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);
    let rotated = first.data()["refresh_token"].as_str().unwrap().to_string();
    assert_ne!(rotated, session.refresh_token);

    let reuse = app
        .request(
            "POST",
            "/api/v1/auth/refresh",
            Some(json!({ "refresh_token": session.refresh_token })),
            None,
        )
        .await;
    assert_eq!(reuse.status, StatusCode::UNAUTHORIZED);

    let user_id = Uuid::parse_str(&session.user_id).unwrap();
    assert_eq!(app.stores.refresh_tokens.count_for_user(user_id), 1);
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let app = TestApp::new();
    let session = app.session("a@x.com").await;
    let body = json!({ "refresh_token": session.refresh_token });

    let first = app
        .request("POST", "/api/v1/auth/logout", Some(body.clone()), None)
        .await;
    let second = app
        .request("POST", "/api/v1/auth/logout", Some(body.clone()), None)
        .await;
    assert_eq!(first.status, StatusCode::NO_CONTENT);
    assert_eq!(second.status, StatusCode::NO_CONTENT);

    let refresh = app
        .request("POST", "/api/v1/auth/refresh", Some(body), None)
        .await;
    assert_eq!(refresh.status, StatusCode::UNAUTHORIZED);

    // Access tokens are stateless and stay valid until expiry.
    let me = app
        .request("GET", "/api/v1/me", None, Some(&session.access_token))
        .await;
    assert_eq!(me.status, StatusCode::OK);
}

#[tokio::test]
async fn test_end_to_end_scenario() {
    let app = TestApp::new();

    let registered = app.register("a@x.com").await;
    assert_eq!(registered.status, StatusCode::CREATED);

    let login = app.login("a@x.com", PASSWORD).await;
    assert_eq!(login.status, StatusCode::OK);
    let access = login.data()["access_token"].as_str().unwrap().to_string();
    let refresh = login.data()["refresh_token"].as_str().unwrap().to_string();

    let created = app.create_project(&access, "Launch").await;
    let project_id = created["project"]["id"].as_str().unwrap();
    let fetched = app
        .request(
            "GET",
            &format!("/api/v1/projects/{project_id}"),
            None,
            Some(&access),
        )
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.data()["name"], "Launch");

    let rotated = app
        .request(
            "POST",
            "/api/v1/auth/refresh",
            Some(json!({ "refresh_token": refresh })),
            None,
        )
        .await;
    assert_eq!(rotated.status, StatusCode::OK);
    let new_access = rotated.data()["access_token"].as_str().unwrap();
    let new_refresh = rotated.data()["refresh_token"].as_str().unwrap();
    assert_ne!(new_refresh, refresh);

    let with_new_token = app
        .request("GET", "/api/v1/projects", None, Some(new_access))
        .await;
    assert_eq!(with_new_token.status, StatusCode::OK);

    let stale = app
        .request(
            "POST",
            "/api/v1/auth/refresh",
            Some(json!({ "refresh_token": refresh })),
            None,
        )
        .await;
    assert_eq!(stale.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_update() {
    let app = TestApp::new();
    let session = app.session("a@x.com").await;

    let response = app
        .request(
            "PATCH",
            "/api/v1/me",
            Some(json!({ "display_name": "Renamed" })),
            Some(&session.access_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["display_name"], "Renamed");
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/v1/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "ok");
    assert_eq!(response.data()["database"], "none");
}

#[tokio::test]
async fn test_malformed_json_is_validation_error() {
    let app = TestApp::new();

    let response = app
        .send(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/login")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}
