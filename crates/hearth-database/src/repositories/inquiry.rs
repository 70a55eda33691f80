//! Seller inquiry repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use hearth_core::error::{AppError, ErrorKind};
use hearth_core::result::AppResult;
use hearth_entity::inquiry::{NewSellerInquiry, SellerInquiry};

/// Repository for seller inquiry intake records.
#[derive(Debug, Clone)]
pub struct SellerInquiryRepository {
    pool: PgPool,
}

impl SellerInquiryRepository {
    /// Create a new seller inquiry repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new inquiry.
    pub async fn create(&self, new: &NewSellerInquiry) -> AppResult<SellerInquiry> {
        sqlx::query_as::<_, SellerInquiry>(
            "INSERT INTO seller_inquiries \
             (id, title, location, price, bedrooms, bathrooms, area, property_type, \
              image, description, amenities, full_name, email, phone, \
              preferred_contact_method, best_time_to_contact) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&new.title)
        .bind(&new.location)
        .bind(new.price)
        .bind(new.bedrooms)
        .bind(new.bathrooms)
        .bind(&new.area)
        .bind(new.property_type)
        .bind(&new.image)
        .bind(&new.description)
        .bind(&new.amenities)
        .bind(&new.full_name)
        .bind(&new.email)
        .bind(&new.phone)
        .bind(new.preferred_contact_method)
        .bind(&new.best_time_to_contact)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create inquiry", e))
    }

    /// List all inquiries, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<SellerInquiry>> {
        sqlx::query_as::<_, SellerInquiry>(
            "SELECT * FROM seller_inquiries ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list inquiries", e))
    }
}
