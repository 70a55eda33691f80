//! Property entity model and payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::PropertyType;
use super::status::PropertyStatus;
use crate::validate::Violation;

/// Placeholder photo used when the lister does not supply one.
pub const DEFAULT_PHOTO: &str = "https://via.placeholder.com/600x400?text=No+Image";

/// A property listing.
///
/// Every property has exactly one owner, assigned at creation time from
/// the authenticated identity — never from the request body.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Unique listing identifier.
    pub id: Uuid,
    /// Listing headline.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Human-readable location.
    pub location: String,
    /// Asking price in whole currency units (non-negative).
    pub price: i64,
    /// Bedroom count.
    pub bedrooms: Option<i32>,
    /// Bathroom count.
    pub bathrooms: Option<i32>,
    /// Floor area in square feet.
    pub area: Option<i32>,
    /// Kind of property.
    pub property_type: PropertyType,
    /// Market status.
    pub status: PropertyStatus,
    /// Photo URL.
    pub photo: String,
    /// Amenity tags.
    pub amenities: Vec<String>,
    /// The identity that created the listing.
    pub owner_id: Uuid,
    /// The agent handling the listing. References may dangle after an
    /// agent is deleted; there is no cascading cleanup.
    pub agent_id: Uuid,
    /// When the listing was created.
    pub created_at: DateTime<Utc>,
    /// When the listing was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Incoming create payload. All fields optional so validation can report
/// every missing field at once instead of failing on deserialization.
/// Deliberately has no owner field: the owner is always the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProperty {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub price: Option<i64>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub area: Option<i32>,
    pub property_type: Option<PropertyType>,
    pub status: Option<PropertyStatus>,
    pub photo: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub agent_id: Option<Uuid>,
}

/// A validated create payload with defaults applied.
#[derive(Debug, Clone)]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub location: String,
    pub price: i64,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub area: Option<i32>,
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    pub photo: String,
    pub amenities: Vec<String>,
    pub agent_id: Uuid,
}

impl CreateProperty {
    /// Validate the payload, returning either a fully-populated
    /// [`NewProperty`] or every violated rule.
    pub fn validate(self) -> Result<NewProperty, Vec<Violation>> {
        let mut violations = Vec::new();

        let required_str = |violations: &mut Vec<Violation>,
                            field: &'static str,
                            value: &Option<String>| {
            match value {
                Some(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
                _ => {
                    violations.push(Violation::new(field, format!("{field} is required")));
                    None
                }
            }
        };

        let title = required_str(&mut violations, "title", &self.title);
        let description = required_str(&mut violations, "description", &self.description);
        let location = required_str(&mut violations, "location", &self.location);

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

        let property_type = match self.property_type {
            Some(t) => Some(t),
            None => {
                violations.push(Violation::new("propertyType", "propertyType is required"));
                None
            }
        };

        let agent_id = match self.agent_id {
            Some(id) => Some(id),
            None => {
                violations.push(Violation::new("agentId", "agentId is required"));
                None
            }
        };

        match (title, description, location, price, property_type, agent_id) {
            (Some(title), Some(description), Some(location), Some(price), Some(kind), Some(agent))
                if violations.is_empty() =>
            {
                Ok(NewProperty {
                    title,
                    description,
                    location,
                    price,
                    bedrooms: self.bedrooms,
                    bathrooms: self.bathrooms,
                    area: self.area,
                    property_type: kind,
                    status: self.status.unwrap_or_default(),
                    photo: self.photo.unwrap_or_else(|| DEFAULT_PHOTO.to_string()),
                    amenities: self.amenities.unwrap_or_default(),
                    agent_id: agent,
                })
            }
            _ => Err(violations),
        }
    }
}

/// Partial update payload: only supplied fields overwrite, omitted fields
/// are left untouched (not nulled).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProperty {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub price: Option<i64>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub area: Option<i32>,
    pub property_type: Option<PropertyType>,
    pub status: Option<PropertyStatus>,
    pub photo: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub agent_id: Option<Uuid>,
}

impl UpdateProperty {
    /// Merge supplied fields onto an existing record. Values that break
    /// the record's invariants are rejected before anything is touched.
    pub fn apply_to(self, property: &mut Property) -> Result<(), Vec<Violation>> {
        if matches!(self.price, Some(p) if p < 0) {
            return Err(vec![Violation::new("price", "price must be non-negative")]);
        }

        if let Some(title) = self.title {
            property.title = title;
        }
        if let Some(description) = self.description {
            property.description = description;
        }
        if let Some(location) = self.location {
            property.location = location;
        }
        if let Some(price) = self.price {
            property.price = price;
        }
        if let Some(bedrooms) = self.bedrooms {
            property.bedrooms = Some(bedrooms);
        }
        if let Some(bathrooms) = self.bathrooms {
            property.bathrooms = Some(bathrooms);
        }
        if let Some(area) = self.area {
            property.area = Some(area);
        }
        if let Some(kind) = self.property_type {
            property.property_type = kind;
        }
        if let Some(status) = self.status {
            property.status = status;
        }
        if let Some(photo) = self.photo {
            property.photo = photo;
        }
        if let Some(amenities) = self.amenities {
            property.amenities = amenities;
        }
        if let Some(agent_id) = self.agent_id {
            property.agent_id = agent_id;
        }
        property.updated_at = Utc::now();
        Ok(())
    }
}
