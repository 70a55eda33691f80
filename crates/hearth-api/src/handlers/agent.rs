//! Agent directory handlers.
//!
//! Mutations here are unauthenticated. The directory has always been
//! maintained by trusted operators and the routes were never gated;
//! hardening it is tracked separately from this surface.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use hearth_core::error::AppError;
use hearth_entity::agent::{Agent, CreateAgent, UpdateAgent};

use crate::dto::response::MessageResponse;
use crate::error::validation_error;
use crate::extractors::{ApiJson, parse_uuid};
use crate::state::AppState;

const NOT_FOUND: &str = "Agent not found";

/// GET /api/agents
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Agent>>, AppError> {
    Ok(Json(state.agent_repo.find_all().await?))
}

/// GET /api/agents/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Agent>, AppError> {
    let id = parse_uuid(&id, NOT_FOUND)?;
    let agent = state
        .agent_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;
    Ok(Json(agent))
}

/// POST /api/agents
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateAgent>,
) -> Result<(StatusCode, Json<Agent>), AppError> {
    let new = payload.validate().map_err(validation_error)?;
    let agent = state.agent_repo.create(&new).await?;
    Ok((StatusCode::CREATED, Json(agent)))
}

/// PUT /api/agents/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateAgent>,
) -> Result<Json<Agent>, AppError> {
    let id = parse_uuid(&id, NOT_FOUND)?;
    let mut agent = state
        .agent_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

    payload.apply_to(&mut agent);
    let updated = state.agent_repo.update(&agent).await?;
    Ok(Json(updated))
}

/// DELETE /api/agents/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_uuid(&id, NOT_FOUND)?;
    let removed = state.agent_repo.delete(id).await?;
    if !removed {
        return Err(AppError::not_found(NOT_FOUND));
    }
    Ok(Json(MessageResponse {
        message: "Agent removed".to_string(),
    }))
}
