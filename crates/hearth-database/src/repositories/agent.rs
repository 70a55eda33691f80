//! Agent repository implementation.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use hearth_core::error::{AppError, ErrorKind};
use hearth_core::result::AppResult;
use hearth_entity::agent::{Agent, NewAgent};

/// Repository for agent directory CRUD operations.
#[derive(Debug, Clone)]
pub struct AgentRepository {
    pool: PgPool,
}

impl AgentRepository {
    /// Create a new agent repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all agents.
    pub async fn find_all(&self) -> AppResult<Vec<Agent>> {
        sqlx::query_as::<_, Agent>("SELECT * FROM agents ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list agents", e))
    }

    /// Find an agent by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Agent>> {
        sqlx::query_as::<_, Agent>("SELECT * FROM agents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find agent", e))
    }

    /// Insert a new agent.
    pub async fn create(&self, new: &NewAgent) -> AppResult<Agent> {
        sqlx::query_as::<_, Agent>(
            "INSERT INTO agents \
             (id, name, title, tagline, bio, photo, email, phone, \
              linkedin, facebook, instagram, areas_served) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&new.name)
        .bind(&new.title)
        .bind(&new.tagline)
        .bind(&new.bio)
        .bind(&new.photo)
        .bind(&new.contact.email)
        .bind(&new.contact.phone)
        .bind(&new.social.linkedin)
        .bind(&new.social.facebook)
        .bind(&new.social.instagram)
        .bind(&new.areas_served)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create agent", e))
    }

    /// Update an agent record (full row, merged by the caller).
    pub async fn update(&self, agent: &Agent) -> AppResult<Agent> {
        sqlx::query_as::<_, Agent>(
            "UPDATE agents SET name = $2, title = $3, tagline = $4, bio = $5, photo = $6, \
             email = $7, phone = $8, linkedin = $9, facebook = $10, instagram = $11, \
             areas_served = $12, updated_at = $13 \
             WHERE id = $1 RETURNING *",
        )
        .bind(agent.id)
        .bind(&agent.name)
        .bind(&agent.title)
        .bind(&agent.tagline)
        .bind(&agent.bio)
        .bind(&agent.photo)
        .bind(&agent.contact.email)
        .bind(&agent.contact.phone)
        .bind(&agent.social.linkedin)
        .bind(&agent.social.facebook)
        .bind(&agent.social.instagram)
        .bind(&agent.areas_served)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update agent", e))?
        .ok_or_else(|| AppError::not_found("Agent not found"))
    }

    /// Delete an agent. Returns false when no row matched. Reviews
    /// referencing the agent are left in place.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM agents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete agent", e))?;
        Ok(result.rows_affected() > 0)
    }
}
