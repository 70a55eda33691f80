//! Integration tests for the registration and login flow.

use axum::http::StatusCode;

use super::helpers::TestApp;

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn register_returns_token_and_user() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "alice",
                "email": "alice@example.com",
                "password": "secret1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body.get("token").is_some());
    assert_eq!(response.body["user"]["username"], "alice");
    assert!(response.body["user"].get("passwordHash").is_none());
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn duplicate_email_is_rejected() {
    let app = TestApp::new().await;
    app.register("bob", "bob@example.com", "secret1").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "robert",
                "email": "bob@example.com",
                "password": "secret1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "User already exists");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn short_password_reports_rule() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "carol",
                "email": "carol@example.com",
                "password": "123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "Password must be at least 6 characters"
    );
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn login_succeeds_with_correct_credentials() {
    let app = TestApp::new().await;
    app.register("dave", "dave@example.com", "secret1").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "dave@example.com",
                "password": "secret1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("token").is_some());
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn wrong_password_and_unknown_email_fail_identically() {
    let app = TestApp::new().await;
    app.register("erin", "erin@example.com", "secret1").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "erin@example.com",
                "password": "wrong",
            })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "nobody@example.com",
                "password": "secret1",
            })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown_email.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_password.body["message"], "Invalid credentials");
    assert_eq!(unknown_email.body["message"], "Invalid credentials");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn me_returns_the_caller() {
    let app = TestApp::new().await;
    let token = app.register("frank", "frank@example.com", "secret1").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["username"], "frank");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn me_without_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Not authorized, no token");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn garbage_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/auth/me", None, Some("not-a-real-token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Not authorized, token failed");
}
