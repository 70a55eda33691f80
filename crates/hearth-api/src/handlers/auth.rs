//! Auth handlers — register, login, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use hearth_core::error::AppError;
use hearth_entity::user::CreateUser;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{AuthResponse, UserResponse};
use crate::error::validation_error;
use crate::extractors::{ApiJson, AuthUser};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let payload = CreateUser {
        username: req.username.unwrap_or_default().trim().to_string(),
        email: req.email.unwrap_or_default().trim().to_lowercase(),
        password: req.password.unwrap_or_default(),
    };

    let violations = payload.validate(state.config.auth.password_min_length);
    if !violations.is_empty() {
        return Err(validation_error(violations));
    }

    // Duplicate username and duplicate email both collapse into the same
    // client-facing message.
    let email_taken = state.user_repo.find_by_email(&payload.email).await?.is_some();
    let username_taken = state
        .user_repo
        .find_by_username(&payload.username)
        .await?
        .is_some();
    if email_taken || username_taken {
        return Err(AppError::validation("User already exists"));
    }

    let password_hash = state.password_hasher.hash_password(&payload.password)?;
    let user = state
        .user_repo
        .create(&payload.username, &payload.email, &password_hash)
        .await?;

    let token = state.jwt_encoder.issue(user.id, &user.username)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let email = req.email.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    // Unknown account and wrong password are indistinguishable to the
    // caller.
    let user = state
        .user_repo
        .find_by_email(&email)
        .await?
        .ok_or_else(|| AppError::validation("Invalid credentials"))?;

    let matches = state
        .password_hasher
        .verify_password(&password, &user.password_hash)?;
    if !matches {
        return Err(AppError::validation("Invalid credentials"));
    }

    let token = state.jwt_encoder.issue(user.id, &user.username)?;

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> Json<UserResponse> {
    Json(auth.into_user().into())
}
