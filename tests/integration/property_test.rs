//! Integration tests for property CRUD and ownership.

use axum::http::StatusCode;

use super::helpers::TestApp;

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn create_requires_a_token() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/properties",
            Some(serde_json::json!({ "title": "Canal View House" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Not authorized, no token");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn created_property_is_owned_by_the_caller() {
    let app = TestApp::new().await;
    let token = app.register("owner1", "owner1@example.com", "secret1").await;
    let agent_id = app.create_agent("Ayesha Khan").await;
    let property_id = app.create_property(&token, "Canal View House", &agent_id).await;

    let response = app
        .request("GET", &format!("/api/properties/{property_id}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "Canal View House");
    assert_eq!(response.body["status"], "For Sale");
    assert!(response.body.get("ownerId").is_some());
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn body_supplied_owner_is_ignored() {
    let app = TestApp::new().await;
    let token = app.register("owner8", "owner8@example.com", "secret1").await;
    let agent_id = app.create_agent("Ayesha Khan").await;

    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    let caller_id = me.body["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "POST",
            "/api/properties",
            Some(serde_json::json!({
                "title": "Canal View House",
                "description": "Spacious family home",
                "location": "Lahore",
                "price": 25_000_000,
                "propertyType": "House",
                "agentId": agent_id,
                "ownerId": "11111111-2222-3333-4444-555555555555",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["ownerId"], caller_id);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn missing_fields_are_all_reported() {
    let app = TestApp::new().await;
    let token = app.register("owner2", "owner2@example.com", "secret1").await;

    let response = app
        .request("POST", "/api/properties", Some(serde_json::json!({})), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Validation Error");
    assert_eq!(response.body["details"].as_array().unwrap().len(), 6);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn list_is_public() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/properties", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.is_array());
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn update_merges_only_supplied_fields() {
    let app = TestApp::new().await;
    let token = app.register("owner3", "owner3@example.com", "secret1").await;
    let agent_id = app.create_agent("Ayesha Khan").await;
    let property_id = app.create_property(&token, "Canal View House", &agent_id).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/properties/{property_id}"),
            Some(serde_json::json!({ "price": 30_000_000 })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["price"], 30_000_000);
    assert_eq!(response.body["title"], "Canal View House");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn negative_price_on_update_is_rejected() {
    let app = TestApp::new().await;
    let token = app.register("owner9", "owner9@example.com", "secret1").await;
    let agent_id = app.create_agent("Ayesha Khan").await;
    let property_id = app.create_property(&token, "Canal View House", &agent_id).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/properties/{property_id}"),
            Some(serde_json::json!({ "price": -1 })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "price must be non-negative");

    let unchanged = app
        .request("GET", &format!("/api/properties/{property_id}"), None, None)
        .await;
    assert_eq!(unchanged.body["price"], 25_000_000);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn non_owner_cannot_update() {
    let app = TestApp::new().await;
    let owner = app.register("owner4", "owner4@example.com", "secret1").await;
    let intruder = app.register("intruder4", "intruder4@example.com", "secret1").await;
    let agent_id = app.create_agent("Ayesha Khan").await;
    let property_id = app.create_property(&owner, "Canal View House", &agent_id).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/properties/{property_id}"),
            Some(serde_json::json!({ "price": 1 })),
            Some(&intruder),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body["message"],
        "Not authorized to update this property"
    );

    let unchanged = app
        .request("GET", &format!("/api/properties/{property_id}"), None, None)
        .await;
    assert_eq!(unchanged.body["price"], 25_000_000);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn non_owner_cannot_delete() {
    let app = TestApp::new().await;
    let owner = app.register("owner5", "owner5@example.com", "secret1").await;
    let intruder = app.register("intruder5", "intruder5@example.com", "secret1").await;
    let agent_id = app.create_agent("Ayesha Khan").await;
    let property_id = app.create_property(&owner, "Canal View House", &agent_id).await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/properties/{property_id}"),
            None,
            Some(&intruder),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body["message"],
        "Not authorized to delete this property"
    );
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn missing_property_is_404_even_for_authenticated_non_owner() {
    let app = TestApp::new().await;
    let token = app.register("owner6", "owner6@example.com", "secret1").await;

    let response = app
        .request(
            "PUT",
            "/api/properties/11111111-2222-3333-4444-555555555555",
            Some(serde_json::json!({ "price": 1 })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Property not found");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn malformed_id_reads_as_not_found() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/properties/not-a-uuid", None, None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Property not found");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn owner_can_delete() {
    let app = TestApp::new().await;
    let token = app.register("owner7", "owner7@example.com", "secret1").await;
    let agent_id = app.create_agent("Ayesha Khan").await;
    let property_id = app.create_property(&token, "Canal View House", &agent_id).await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/properties/{property_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Property removed");

    let response = app
        .request("GET", &format!("/api/properties/{property_id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
