//! Review entity model and payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::validate::Violation;

/// Maximum comment length in characters.
pub const MAX_COMMENT_LENGTH: usize = 1000;

/// A review of an agent or a property.
///
/// Targets are plain references: deleting the reviewed agent or property
/// leaves the review orphaned by design.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique review identifier.
    pub id: Uuid,
    /// Star rating, 1 through 5.
    pub rating: i32,
    /// Review text.
    pub comment: String,
    /// Reviewed agent, if any.
    pub agent_id: Option<Uuid>,
    /// Reviewed property, if any.
    pub property_id: Option<Uuid>,
    /// Optional reviewer identity.
    pub client_id: Option<Uuid>,
    /// When the review was created.
    pub created_at: DateTime<Utc>,
}

/// Incoming create payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReview {
    pub rating: Option<i32>,
    pub comment: Option<String>,
    pub agent_id: Option<Uuid>,
    pub property_id: Option<Uuid>,
    pub client_id: Option<Uuid>,
}

/// A validated create payload. Target existence is checked at the handler
/// against the live collections, not here.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub rating: i32,
    pub comment: String,
    pub agent_id: Option<Uuid>,
    pub property_id: Option<Uuid>,
    pub client_id: Option<Uuid>,
}

impl CreateReview {
    /// Validate the payload, returning every violated rule.
    pub fn validate(self) -> Result<NewReview, Vec<Violation>> {
        let mut violations = Vec::new();

        let comment = match &self.comment {
            Some(c) if !c.trim().is_empty() => {
                let trimmed = c.trim();
                if trimmed.chars().count() > MAX_COMMENT_LENGTH {
                    violations.push(Violation::new(
                        "comment",
                        format!("Comment must be at most {MAX_COMMENT_LENGTH} characters"),
                    ));
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            _ => {
                violations.push(Violation::new(
                    "comment",
                    "Please include a rating and a comment",
                ));
                None
            }
        };

        let rating = match self.rating {
            Some(r) if (1..=5).contains(&r) => Some(r),
            Some(_) => {
                violations.push(Violation::new("rating", "Rating must be between 1 and 5"));
                None
            }
            None => {
                violations.push(Violation::new(
                    "rating",
                    "Please include a rating and a comment",
                ));
                None
            }
        };

        if self.agent_id.is_none() && self.property_id.is_none() {
            violations.push(Violation::new(
                "agentId",
                "Review must be for an agent or a property",
            ));
        }

        match (rating, comment) {
            (Some(rating), Some(comment)) if violations.is_empty() => Ok(NewReview {
                rating,
                comment,
                agent_id: self.agent_id,
                property_id: self.property_id,
                client_id: self.client_id,
            }),
            _ => Err(violations),
        }
    }
}
