//! Agent entity model and payloads.
//!
//! Agents are a standalone directory: they are not owned by a user
//! identity, and mutation is currently unauthenticated. That gap is
//! deliberate and documented rather than silently hardened.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::validate::{Violation, is_valid_email};

/// Contact details for an agent.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AgentContact {
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
}

/// Social profile links for an agent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct AgentSocial {
    pub linkedin: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
}

/// A listing agent in the public directory.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Unique agent identifier.
    pub id: Uuid,
    /// Agent's full name.
    pub name: String,
    /// Professional title.
    pub title: String,
    /// Short marketing tagline.
    pub tagline: Option<String>,
    /// Biography text.
    pub bio: Option<String>,
    /// Photo URL.
    pub photo: Option<String>,
    /// Contact details.
    #[sqlx(flatten)]
    pub contact: AgentContact,
    /// Social links.
    #[sqlx(flatten)]
    pub social: AgentSocial,
    /// Areas this agent serves.
    pub areas_served: Vec<String>,
    /// When the agent was created.
    pub created_at: DateTime<Utc>,
    /// When the agent was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Incoming contact payload with optional fields for validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactPayload {
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Incoming create payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAgent {
    pub name: Option<String>,
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub bio: Option<String>,
    pub photo: Option<String>,
    pub contact: Option<ContactPayload>,
    pub social: Option<AgentSocial>,
    pub areas_served: Option<Vec<String>>,
}

/// A validated create payload.
#[derive(Debug, Clone)]
pub struct NewAgent {
    pub name: String,
    pub title: String,
    pub tagline: Option<String>,
    pub bio: Option<String>,
    pub photo: Option<String>,
    pub contact: AgentContact,
    pub social: AgentSocial,
    pub areas_served: Vec<String>,
}

impl CreateAgent {
    /// Validate the payload, returning every violated rule.
    pub fn validate(self) -> Result<NewAgent, Vec<Violation>> {
        let mut violations = Vec::new();

        let name = match &self.name {
            Some(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
            _ => {
                violations.push(Violation::new("name", "name is required"));
                None
            }
        };
        let title = match &self.title {
            Some(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
            _ => {
                violations.push(Violation::new("title", "title is required"));
                None
            }
        };

        let contact = self.contact.unwrap_or_default();
        let email = match &contact.email {
            Some(v) if is_valid_email(v.trim()) => Some(v.trim().to_lowercase()),
            Some(_) => {
                violations.push(Violation::new(
                    "contact.email",
                    "Please enter a valid email address",
                ));
                None
            }
            None => {
                violations.push(Violation::new("contact.email", "contact.email is required"));
                None
            }
        };
        let phone = match &contact.phone {
            Some(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
            _ => {
                violations.push(Violation::new("contact.phone", "contact.phone is required"));
                None
            }
        };

        match (name, title, email, phone) {
            (Some(name), Some(title), Some(email), Some(phone)) if violations.is_empty() => {
                Ok(NewAgent {
                    name,
                    title,
                    tagline: self.tagline,
                    bio: self.bio,
                    photo: self.photo,
                    contact: AgentContact { email, phone },
                    social: self.social.unwrap_or_default(),
                    areas_served: self.areas_served.unwrap_or_default(),
                })
            }
            _ => Err(violations),
        }
    }
}

/// Partial update payload. Contact and social blocks are replaced
/// wholesale when supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAgent {
    pub name: Option<String>,
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub bio: Option<String>,
    pub photo: Option<String>,
    pub contact: Option<AgentContact>,
    pub social: Option<AgentSocial>,
    pub areas_served: Option<Vec<String>>,
}

impl UpdateAgent {
    /// Merge supplied fields onto an existing record.
    pub fn apply_to(self, agent: &mut Agent) {
        if let Some(name) = self.name {
            agent.name = name;
        }
        if let Some(title) = self.title {
            agent.title = title;
        }
        if let Some(tagline) = self.tagline {
            agent.tagline = Some(tagline);
        }
        if let Some(bio) = self.bio {
            agent.bio = Some(bio);
        }
        if let Some(photo) = self.photo {
            agent.photo = Some(photo);
        }
        if let Some(contact) = self.contact {
            agent.contact = contact;
        }
        if let Some(social) = self.social {
            agent.social = social;
        }
        if let Some(areas) = self.areas_served {
            agent.areas_served = areas;
        }
        agent.updated_at = Utc::now();
    }
}
