//! Integration tests for the contact form.

use axum::http::StatusCode;

use super::helpers::TestApp;

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn valid_message_is_stored() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/contact",
            Some(serde_json::json!({
                "name": "Bilal Ahmed",
                "email": "bilal@example.com",
                "subject": "Viewing request",
                "message": "Is the canal house available this weekend?",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "Message sent successfully");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn missing_fields_are_reported() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/contact", Some(serde_json::json!({})), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["details"].as_array().unwrap().len(), 3);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn invalid_email_has_its_own_message() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/contact",
            Some(serde_json::json!({
                "name": "Bilal Ahmed",
                "email": "not-an-email",
                "message": "Hello",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Please enter a valid email address");
}
