//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::validate::{Violation, is_valid_email};

/// A registered identity on the platform.
///
/// The password hash is produced with a randomized per-record salt and is
/// never serialized into responses.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique login name.
    pub username: String,
    /// Unique email address, stored lowercased.
    pub email: String,
    /// Argon2id password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Registration payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Plaintext password; hashed before storage, never persisted as-is.
    pub password: String,
}

impl CreateUser {
    /// Validate the registration payload, returning every violated rule.
    ///
    /// `password_min_length` comes from configuration so the rule can be
    /// tightened without touching entity code.
    pub fn validate(&self, password_min_length: usize) -> Vec<Violation> {
        let mut violations = Vec::new();

        if self.username.trim().len() < 3 {
            violations.push(Violation::new(
                "username",
                "Username must be at least 3 characters",
            ));
        }
        if !is_valid_email(self.email.trim()) {
            violations.push(Violation::new(
                "email",
                "Please enter a valid email address",
            ));
        }
        if self.password.len() < password_min_length {
            violations.push(Violation::new(
                "password",
                format!("Password must be at least {password_min_length} characters"),
            ));
        }

        violations
    }
}
