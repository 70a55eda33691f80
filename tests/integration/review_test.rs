//! Integration tests for review submission and listing.

use axum::http::StatusCode;

use super::helpers::TestApp;

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn review_for_agent_is_created_and_listed() {
    let app = TestApp::new().await;
    let agent_id = app.create_agent("Ayesha Khan").await;

    let response = app
        .request(
            "POST",
            "/api/reviews",
            Some(serde_json::json!({
                "rating": 4,
                "comment": "Very helpful during negotiation",
                "agentId": agent_id,
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["rating"], 4);

    let listing = app
        .request("GET", &format!("/api/reviews/agent/{agent_id}"), None, None)
        .await;
    assert_eq!(listing.status, StatusCode::OK);
    assert_eq!(listing.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn rating_out_of_range_is_rejected() {
    let app = TestApp::new().await;
    let agent_id = app.create_agent("Ayesha Khan").await;

    let response = app
        .request(
            "POST",
            "/api/reviews",
            Some(serde_json::json!({
                "rating": 6,
                "comment": "great",
                "agentId": agent_id,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Rating must be between 1 and 5");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn wrong_typed_rating_is_a_validation_error() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/reviews",
            Some(serde_json::json!({
                "rating": "five",
                "comment": "great",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn review_without_target_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/reviews",
            Some(serde_json::json!({
                "rating": 4,
                "comment": "great",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "Review must be for an agent or a property"
    );
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn review_for_unknown_agent_is_404() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/reviews",
            Some(serde_json::json!({
                "rating": 4,
                "comment": "great",
                "agentId": "11111111-2222-3333-4444-555555555555",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Agent not found");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn property_reviews_are_listed_separately() {
    let app = TestApp::new().await;
    let token = app.register("reviewer", "reviewer@example.com", "secret1").await;
    let agent_id = app.create_agent("Ayesha Khan").await;
    let property_id = app.create_property(&token, "Canal View House", &agent_id).await;

    let response = app
        .request(
            "POST",
            "/api/reviews",
            Some(serde_json::json!({
                "rating": 5,
                "comment": "Lovely neighborhood",
                "propertyId": property_id,
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let by_property = app
        .request(
            "GET",
            &format!("/api/reviews/property/{property_id}"),
            None,
            None,
        )
        .await;
    assert_eq!(by_property.status, StatusCode::OK);
    assert_eq!(by_property.body.as_array().unwrap().len(), 1);

    let by_agent = app
        .request("GET", &format!("/api/reviews/agent/{agent_id}"), None, None)
        .await;
    assert_eq!(by_agent.body.as_array().unwrap().len(), 0);
}
