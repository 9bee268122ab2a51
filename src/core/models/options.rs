//! Selectable filter options

use serde::Serialize;

use super::resource::{RawRoute, RawTrip};

/// A route the user can filter by
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteOption {
    /// Route id
    pub id: String,
    /// Route long name
    pub display_name: String,
}

/// A trip the user can filter by
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripOption {
    /// Trip id
    pub id: String,
    /// Trip headsign
    pub display_name: String,
}

impl From<RawRoute> for RouteOption {
    fn from(raw: RawRoute) -> Self {
        Self {
            id: raw.id,
            display_name: raw.attributes.long_name,
        }
    }
}

impl From<RawTrip> for TripOption {
    fn from(raw: RawTrip) -> Self {
        Self {
            id: raw.id,
            display_name: raw.attributes.headsign,
        }
    }
}
