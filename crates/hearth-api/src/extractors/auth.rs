//! `AuthUser` extractor — pulls the bearer token from the Authorization
//! header, verifies it, and loads the caller's account.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use hearth_core::error::AppError;
use hearth_entity::user::User;

use crate::state::AppState;

/// Message returned when no usable bearer token is presented.
const NO_TOKEN: &str = "Not authorized, no token";
/// Message returned when a presented token does not check out.
const TOKEN_FAILED: &str = "Not authorized, token failed";

/// Extracted authenticated user available in handlers.
///
/// Any route that includes this extractor is gated: requests without a
/// valid token are rejected before the handler body runs.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl AuthUser {
    /// Returns the caller's user ID.
    pub fn user_id(&self) -> Uuid {
        self.0.id
    }

    /// Consumes the extractor, returning the loaded account.
    pub fn into_user(self) -> User {
        self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized(NO_TOKEN))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized(NO_TOKEN))?;

        // Expired and malformed tokens fail identically from the
        // caller's point of view.
        let claims = state
            .jwt_decoder
            .verify(token)
            .map_err(|_| AppError::unauthorized(TOKEN_FAILED))?;

        // The account may have been deleted since the token was issued.
        let user = state
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::unauthorized(TOKEN_FAILED))?;

        Ok(AuthUser(user))
    }
}
