//! Contact message entity model and payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::validate::{Violation, is_valid_email};

/// An anonymous contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    /// Unique message identifier.
    pub id: Uuid,
    /// Sender's name.
    pub name: String,
    /// Sender's email.
    pub email: String,
    /// Optional subject line.
    pub subject: Option<String>,
    /// Message body.
    pub message: String,
    /// When the message was submitted.
    pub created_at: DateTime<Utc>,
}

/// Incoming contact-form payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactMessage {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// A validated contact-form payload.
#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl CreateContactMessage {
    /// Validate the payload, returning every violated rule.
    pub fn validate(self) -> Result<NewContactMessage, Vec<Violation>> {
        let mut violations = Vec::new();

        let name = match &self.name {
            Some(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
            _ => {
                violations.push(Violation::new("name", "Name is required"));
                None
            }
        };

        let email = match &self.email {
            Some(v) if is_valid_email(v.trim()) => Some(v.trim().to_string()),
            Some(v) if !v.trim().is_empty() => {
                violations.push(Violation::new(
                    "email",
                    "Please enter a valid email address",
                ));
                None
            }
            _ => {
                violations.push(Violation::new("email", "Email is required"));
                None
            }
        };

        let message = match &self.message {
            Some(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
            _ => {
                violations.push(Violation::new("message", "Message is required"));
                None
            }
        };

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) if violations.is_empty() => {
                Ok(NewContactMessage {
                    name,
                    email,
                    subject: self.subject.map(|s| s.trim().to_string()),
                    message,
                })
            }
            _ => Err(violations),
        }
    }
}
