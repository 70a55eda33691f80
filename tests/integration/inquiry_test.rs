//! Integration tests for seller inquiry intake.

use axum::http::StatusCode;

use super::helpers::TestApp;

fn valid_inquiry() -> serde_json::Value {
    serde_json::json!({
        "title": "Three bed house near canal",
        "location": "Lahore",
        "price": 18_000_000,
        "area": "10 Marla",
        "type": "House",
        "description": "Well maintained house with a small garden out back",
        "fullName": "Bilal Ahmed",
        "email": "Bilal@Example.com",
        "phone": "0321-9876543",
    })
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn valid_inquiry_is_stored_with_defaults() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/seller-inquiries", Some(valid_inquiry()), None)
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "Inquiry submitted successfully");
    let inquiry = &response.body["inquiry"];
    assert_eq!(inquiry["status"], "Pending Review");
    assert_eq!(inquiry["preferredContactMethod"], "Any");
    assert_eq!(inquiry["email"], "bilal@example.com");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn empty_inquiry_reports_every_rule() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/seller-inquiries", Some(serde_json::json!({})), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Validation Error");
    assert!(response.body["details"].as_array().unwrap().len() >= 8);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn short_description_is_rejected() {
    let app = TestApp::new().await;
    let mut inquiry = valid_inquiry();
    inquiry["description"] = serde_json::json!("too short");

    let response = app
        .request("POST", "/api/seller-inquiries", Some(inquiry), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "description must be at least 20 characters"
    );
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn inquiries_list_newest_first() {
    let app = TestApp::new().await;

    let mut first = valid_inquiry();
    first["title"] = serde_json::json!("First listed house");
    app.request("POST", "/api/seller-inquiries", Some(first), None).await;

    let mut second = valid_inquiry();
    second["title"] = serde_json::json!("Second listed house");
    app.request("POST", "/api/seller-inquiries", Some(second), None).await;

    let response = app.request("GET", "/api/seller-inquiries", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "Second listed house");
}
