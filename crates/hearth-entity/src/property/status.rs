//! Listing status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The market status of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "property_status", rename_all = "snake_case")]
pub enum PropertyStatus {
    /// Listed for sale (the default for new listings).
    #[serde(rename = "For Sale")]
    ForSale,
    /// Listed for rent.
    #[serde(rename = "For Rent")]
    ForRent,
    /// Sale completed.
    Sold,
    /// Rental completed.
    Rented,
}

impl Default for PropertyStatus {
    fn default() -> Self {
        Self::ForSale
    }
}

impl PropertyStatus {
    /// Return the status as its display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ForSale => "For Sale",
            Self::ForRent => "For Rent",
            Self::Sold => "Sold",
            Self::Rented => "Rented",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
