//! Seller inquiry entity model and payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::{ContactMethod, InquiryStatus, InquiryType};
use crate::validate::{Violation, is_valid_email};

/// Placeholder image used when the seller does not supply one.
pub const DEFAULT_IMAGE: &str =
    "https://via.placeholder.com/400x300/F0F2F5/CCCCCC?text=No+Image";

/// Minimum description length on the intake form.
pub const MIN_DESCRIPTION_LENGTH: usize = 20;

/// An anonymous seller intake record. Unowned: created by public
/// submission, read by internal consumers.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SellerInquiry {
    /// Unique inquiry identifier.
    pub id: Uuid,
    /// Property headline.
    pub title: String,
    /// Property location.
    pub location: String,
    /// Asking price in whole currency units.
    pub price: i64,
    /// Bedroom count.
    pub bedrooms: Option<i32>,
    /// Bathroom count.
    pub bathrooms: Option<i32>,
    /// Free-form area description (e.g. "10 Marla", "2500 Sq. Ft.").
    pub area: String,
    /// Kind of property offered.
    pub property_type: InquiryType,
    /// Triage status.
    pub status: InquiryStatus,
    /// Image URL.
    pub image: String,
    /// Property description.
    pub description: String,
    /// Amenity tags.
    pub amenities: Vec<String>,
    /// Seller's full name.
    pub full_name: String,
    /// Seller's email, stored lowercased.
    pub email: String,
    /// Seller's phone number.
    pub phone: String,
    /// Preferred contact channel.
    pub preferred_contact_method: ContactMethod,
    /// Free-form preferred contact window.
    pub best_time_to_contact: String,
    /// When the inquiry was submitted.
    pub created_at: DateTime<Utc>,
    /// When the inquiry was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Incoming intake payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSellerInquiry {
    pub title: Option<String>,
    pub location: Option<String>,
    pub price: Option<i64>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub area: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<InquiryType>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub preferred_contact_method: Option<ContactMethod>,
    pub best_time_to_contact: Option<String>,
}

/// A validated intake payload with defaults applied.
#[derive(Debug, Clone)]
pub struct NewSellerInquiry {
    pub title: String,
    pub location: String,
    pub price: i64,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub area: String,
    pub property_type: InquiryType,
    pub image: String,
    pub description: String,
    pub amenities: Vec<String>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub preferred_contact_method: ContactMethod,
    pub best_time_to_contact: String,
}

impl CreateSellerInquiry {
    /// Validate the intake payload, returning every violated rule.
    pub fn validate(self) -> Result<NewSellerInquiry, Vec<Violation>> {
        let mut violations = Vec::new();

        let title = match &self.title {
            Some(v) if v.trim().chars().count() >= 3 => Some(v.trim().to_string()),
            Some(_) => {
                violations.push(Violation::new(
                    "title",
                    "title must be at least 3 characters",
                ));
                None
            }
            None => {
                violations.push(Violation::new("title", "title is required"));
                None
            }
        };

        let location = match &self.location {
            Some(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
            _ => {
                violations.push(Violation::new("location", "location is required"));
                None
            }
        };

        let price = match self.price {
            Some(p) if p >= 0 => Some(p),
            Some(_) => {
                violations.push(Violation::new("price", "price must be non-negative"));
                None
            }
            None => {
                violations.push(Violation::new("price", "price is required"));
                None
            }
        };

        let area = match &self.area {
            Some(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
            _ => {
                violations.push(Violation::new("area", "area is required"));
                None
            }
        };

        let property_type = match self.property_type {
            Some(t) => Some(t),
            None => {
                violations.push(Violation::new("type", "type is required"));
                None
            }
        };

        let description = match &self.description {
            Some(v) if v.trim().chars().count() >= MIN_DESCRIPTION_LENGTH => {
                Some(v.trim().to_string())
            }
            Some(_) => {
                violations.push(Violation::new(
                    "description",
                    format!("description must be at least {MIN_DESCRIPTION_LENGTH} characters"),
                ));
                None
            }
            None => {
                violations.push(Violation::new("description", "description is required"));
                None
            }
        };

        let full_name = match &self.full_name {
            Some(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
            _ => {
                violations.push(Violation::new("fullName", "fullName is required"));
                None
            }
        };

        let email = match &self.email {
            Some(v) if is_valid_email(v.trim()) => Some(v.trim().to_lowercase()),
            Some(_) => {
                violations.push(Violation::new(
                    "email",
                    "Please fill a valid email address",
                ));
                None
            }
            None => {
                violations.push(Violation::new("email", "email is required"));
                None
            }
        };

        let phone = match &self.phone {
            Some(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
            _ => {
                violations.push(Violation::new("phone", "phone is required"));
                None
            }
        };

        if !violations.is_empty() {
            return Err(violations);
        }

        // All required fields are present once violations is empty.
        match (title, location, price, area, property_type, description, full_name, email, phone) {
            (
                Some(title),
                Some(location),
                Some(price),
                Some(area),
                Some(property_type),
                Some(description),
                Some(full_name),
                Some(email),
                Some(phone),
            ) => Ok(NewSellerInquiry {
                title,
                location,
                price,
                bedrooms: self.bedrooms,
                bathrooms: self.bathrooms,
                area,
                property_type,
                image: self.image.unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
                description,
                amenities: self.amenities.unwrap_or_default(),
                full_name,
                email,
                phone,
                preferred_contact_method: self.preferred_contact_method.unwrap_or_default(),
                best_time_to_contact: self.best_time_to_contact.unwrap_or_default(),
            }),
            _ => Err(vec![Violation::new("payload", "Validation Error")]),
        }
    }
}
