//! Seller inquiry handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use hearth_core::error::AppError;
use hearth_entity::inquiry::{CreateSellerInquiry, SellerInquiry};

use crate::dto::response::InquiryCreatedResponse;
use crate::error::validation_error;
use crate::extractors::ApiJson;
use crate::state::AppState;

/// POST /api/seller-inquiries
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateSellerInquiry>,
) -> Result<(StatusCode, Json<InquiryCreatedResponse>), AppError> {
    let new = payload.validate().map_err(validation_error)?;
    let inquiry = state.inquiry_repo.create(&new).await?;
    Ok((
        StatusCode::CREATED,
        Json(InquiryCreatedResponse {
            message: "Inquiry submitted successfully".to_string(),
            inquiry,
        }),
    ))
}

/// GET /api/seller-inquiries
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<SellerInquiry>>, AppError> {
    Ok(Json(state.inquiry_repo.find_all().await?))
}
