//! Property type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of property being listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "property_type", rename_all = "snake_case")]
pub enum PropertyType {
    House,
    Apartment,
    Villa,
    Plot,
    Commercial,
    Farmhouse,
    Industrial,
    Agricultural,
    Townhouse,
}

impl PropertyType {
    /// Return the type as its display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::House => "House",
            Self::Apartment => "Apartment",
            Self::Villa => "Villa",
            Self::Plot => "Plot",
            Self::Commercial => "Commercial",
            Self::Farmhouse => "Farmhouse",
            Self::Industrial => "Industrial",
            Self::Agricultural => "Agricultural",
            Self::Townhouse => "Townhouse",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
