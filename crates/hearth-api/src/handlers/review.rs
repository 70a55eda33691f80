//! Review handlers.

use axum::Json;
use axum::extract::{Path, State};

use hearth_core::error::AppError;
use hearth_entity::review::{CreateReview, Review};

use crate::error::validation_error;
use crate::extractors::{ApiJson, parse_uuid};
use crate::state::AppState;

/// POST /api/reviews
///
/// The referenced agent or property must exist at submission time, but
/// nothing keeps the reference alive afterwards.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateReview>,
) -> Result<Json<Review>, AppError> {
    let new = payload.validate().map_err(validation_error)?;

    if let Some(agent_id) = new.agent_id {
        state
            .agent_repo
            .find_by_id(agent_id)
            .await?
            .ok_or_else(|| AppError::not_found("Agent not found"))?;
    }
    if let Some(property_id) = new.property_id {
        state
            .property_repo
            .find_by_id(property_id)
            .await?
            .ok_or_else(|| AppError::not_found("Property not found"))?;
    }

    let review = state.review_repo.create(&new).await?;
    Ok(Json(review))
}

/// GET /api/reviews/agent/{id}
pub async fn by_agent(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Review>>, AppError> {
    let id = parse_uuid(&id, "Agent not found")?;
    state
        .agent_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Agent not found"))?;
    Ok(Json(state.review_repo.find_by_agent(id).await?))
}

/// GET /api/reviews/property/{id}
pub async fn by_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Review>>, AppError> {
    let id = parse_uuid(&id, "Property not found")?;
    state
        .property_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Property not found"))?;
    Ok(Json(state.review_repo.find_by_property(id).await?))
}
