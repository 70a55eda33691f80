//! Integration tests for the agent directory.

use axum::http::StatusCode;

use super::helpers::TestApp;

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn create_and_fetch_agent() {
    let app = TestApp::new().await;
    let agent_id = app.create_agent("Ayesha Khan").await;

    let response = app
        .request("GET", &format!("/api/agents/{agent_id}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Ayesha Khan");
    assert_eq!(response.body["contact"]["email"], "agent@example.com");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn missing_contact_fields_are_reported() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/agents",
            Some(serde_json::json!({
                "name": "Ayesha Khan",
                "title": "Senior Agent",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["details"].as_array().unwrap().len(), 2);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn update_replaces_contact_wholesale() {
    let app = TestApp::new().await;
    let agent_id = app.create_agent("Ayesha Khan").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/agents/{agent_id}"),
            Some(serde_json::json!({
                "contact": {
                    "email": "new@example.com",
                    "phone": "0311-7654321",
                },
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["contact"]["email"], "new@example.com");
    assert_eq!(response.body["name"], "Ayesha Khan");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn delete_agent_leaves_reviews_in_place() {
    let app = TestApp::new().await;
    let agent_id = app.create_agent("Ayesha Khan").await;

    let review = app
        .request(
            "POST",
            "/api/reviews",
            Some(serde_json::json!({
                "rating": 5,
                "comment": "Responsive and honest",
                "agentId": agent_id,
            })),
            None,
        )
        .await;
    assert_eq!(review.status, StatusCode::OK);

    let response = app
        .request("DELETE", &format!("/api/agents/{agent_id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Agent removed");

    // The review row survives; listing by the deleted agent now 404s.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews WHERE agent_id = $1::uuid")
        .bind(&agent_id)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let listing = app
        .request("GET", &format!("/api/reviews/agent/{agent_id}"), None, None)
        .await;
    assert_eq!(listing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn deleting_unknown_agent_is_404() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "DELETE",
            "/api/agents/11111111-2222-3333-4444-555555555555",
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Agent not found");
}
