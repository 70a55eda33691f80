//! Contact message repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use hearth_core::error::{AppError, ErrorKind};
use hearth_core::result::AppResult;
use hearth_entity::contact::{ContactMessage, NewContactMessage};

/// Repository for contact-form submissions.
#[derive(Debug, Clone)]
pub struct ContactMessageRepository {
    pool: PgPool,
}

impl ContactMessageRepository {
    /// Create a new contact message repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new contact message.
    pub async fn create(&self, new: &NewContactMessage) -> AppResult<ContactMessage> {
        sqlx::query_as::<_, ContactMessage>(
            "INSERT INTO contact_messages (id, name, email, subject, message) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.subject)
        .bind(&new.message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create contact message", e)
        })
    }
}
