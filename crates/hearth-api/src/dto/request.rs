//! Request DTOs.
//!
//! Auth payloads use `Option` fields so missing keys reach the handler
//! and produce a domain error message instead of a deserialization 422.

use serde::{Deserialize, Serialize};

/// Registration payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Desired username.
    pub username: Option<String>,
    /// Account email.
    pub email: Option<String>,
    /// Plaintext password, hashed before storage.
    pub password: Option<String>,
}

/// Login payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}
