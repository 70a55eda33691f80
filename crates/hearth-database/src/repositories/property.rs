//! Property repository implementation.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use hearth_core::error::{AppError, ErrorKind};
use hearth_core::result::AppResult;
use hearth_entity::property::{NewProperty, Property};

/// Repository for property listing CRUD operations.
#[derive(Debug, Clone)]
pub struct PropertyRepository {
    pool: PgPool,
}

impl PropertyRepository {
    /// Create a new property repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all properties.
    pub async fn find_all(&self) -> AppResult<Vec<Property>> {
        sqlx::query_as::<_, Property>("SELECT * FROM properties ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list properties", e))
    }

    /// Find a property by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Property>> {
        sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find property", e))
    }

    /// Insert a new listing. The owner is always the authenticated
    /// creator, passed separately from the client payload.
    pub async fn create(&self, new: &NewProperty, owner_id: Uuid) -> AppResult<Property> {
        sqlx::query_as::<_, Property>(
            "INSERT INTO properties \
             (id, title, description, location, price, bedrooms, bathrooms, area, \
              property_type, status, photo, amenities, owner_id, agent_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.location)
        .bind(new.price)
        .bind(new.bedrooms)
        .bind(new.bathrooms)
        .bind(new.area)
        .bind(new.property_type)
        .bind(new.status)
        .bind(&new.photo)
        .bind(&new.amenities)
        .bind(owner_id)
        .bind(new.agent_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create property", e))
    }

    /// Update a listing record (full row, merged by the caller).
    pub async fn update(&self, property: &Property) -> AppResult<Property> {
        sqlx::query_as::<_, Property>(
            "UPDATE properties SET title = $2, description = $3, location = $4, price = $5, \
             bedrooms = $6, bathrooms = $7, area = $8, property_type = $9, status = $10, \
             photo = $11, amenities = $12, agent_id = $13, updated_at = $14 \
             WHERE id = $1 RETURNING *",
        )
        .bind(property.id)
        .bind(&property.title)
        .bind(&property.description)
        .bind(&property.location)
        .bind(property.price)
        .bind(property.bedrooms)
        .bind(property.bathrooms)
        .bind(property.area)
        .bind(property.property_type)
        .bind(property.status)
        .bind(&property.photo)
        .bind(&property.amenities)
        .bind(property.agent_id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update property", e))?
        .ok_or_else(|| AppError::not_found("Property not found"))
    }

    /// Delete a listing. Returns false when no row matched.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete property", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
