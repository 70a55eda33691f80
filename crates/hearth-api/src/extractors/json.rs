//! JSON body extractor that keeps malformed payloads inside the
//! platform error taxonomy.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use hearth_core::error::AppError;

/// `axum::Json` with rejections rendered as 400 validation errors
/// instead of Axum's default 422 body.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}
