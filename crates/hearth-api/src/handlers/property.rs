//! Property handlers — public reads, owner-gated mutations.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use hearth_auth::ownership::authorize_mutation;
use hearth_core::error::AppError;
use hearth_entity::property::{CreateProperty, Property, UpdateProperty};

use crate::dto::response::MessageResponse;
use crate::error::validation_error;
use crate::extractors::{ApiJson, AuthUser, parse_uuid};
use crate::state::AppState;

const NOT_FOUND: &str = "Property not found";

/// GET /api/properties
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Property>>, AppError> {
    Ok(Json(state.property_repo.find_all().await?))
}

/// GET /api/properties/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Property>, AppError> {
    let id = parse_uuid(&id, NOT_FOUND)?;
    let property = state
        .property_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;
    Ok(Json(property))
}

/// POST /api/properties
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(payload): ApiJson<CreateProperty>,
) -> Result<(StatusCode, Json<Property>), AppError> {
    let new = payload.validate().map_err(validation_error)?;
    let property = state.property_repo.create(&new, auth.user_id()).await?;
    Ok((StatusCode::CREATED, Json(property)))
}

/// PUT /api/properties/{id}
///
/// Existence is checked before ownership: an absent or malformed id is
/// a 404, while an existing listing owned by someone else is a 401.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateProperty>,
) -> Result<Json<Property>, AppError> {
    let id = parse_uuid(&id, NOT_FOUND)?;
    let mut property = state
        .property_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

    authorize_mutation(Some(property.owner_id), auth.user_id(), "update", "property")?;

    payload.apply_to(&mut property).map_err(validation_error)?;
    let updated = state.property_repo.update(&property).await?;
    Ok(Json(updated))
}

/// DELETE /api/properties/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_uuid(&id, NOT_FOUND)?;
    let property = state
        .property_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

    authorize_mutation(Some(property.owner_id), auth.user_id(), "delete", "property")?;

    state.property_repo.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Property removed".to_string(),
    }))
}
