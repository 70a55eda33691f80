//! Contact form handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use hearth_core::error::AppError;
use hearth_entity::contact::CreateContactMessage;

use crate::dto::response::MessageResponse;
use crate::error::validation_error;
use crate::extractors::ApiJson;
use crate::state::AppState;

/// POST /api/contact
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateContactMessage>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let new = payload.validate().map_err(validation_error)?;
    state.contact_repo.create(&new).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Message sent successfully".to_string(),
        }),
    ))
}
