//! Seller inquiry enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Property kinds accepted on the seller intake form (a narrower set than
/// the full listing catalogue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "inquiry_type", rename_all = "snake_case")]
pub enum InquiryType {
    House,
    Apartment,
    Plot,
    Commercial,
    Farmhouse,
}

/// Triage status of a seller inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "inquiry_status", rename_all = "snake_case")]
pub enum InquiryStatus {
    /// Newly submitted, awaiting triage (the default).
    #[serde(rename = "Pending Review")]
    PendingReview,
    /// A staff member has reached out.
    Contacted,
    /// Accepted for listing.
    Approved,
    /// Declined.
    Rejected,
}

impl Default for InquiryStatus {
    fn default() -> Self {
        Self::PendingReview
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PendingReview => "Pending Review",
            Self::Contacted => "Contacted",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        };
        write!(f, "{s}")
    }
}

/// How the seller prefers to be contacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "contact_method", rename_all = "snake_case")]
pub enum ContactMethod {
    Email,
    Phone,
    Any,
}

impl Default for ContactMethod {
    fn default() -> Self {
        Self::Any
    }
}
