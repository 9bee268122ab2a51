//! Vehicle record model
//!
//! A [`VehicleRecord`] is the flattened, display-ready form of a raw vehicle
//! resource. Records are immutable; lists of them are replaced or appended to,
//! never patched.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::resource::RawVehicle;

/// Label used when the API reports none
pub const UNKNOWN_LABEL: &str = "N/A";

/// Route/trip id used when the relationship is absent
pub const UNKNOWN_ID: &str = "Unknown";

/// Map zoom used for a vehicle pin, in degrees
pub const PIN_DELTA: f64 = 0.01;

/// Current movement status of a vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VehicleStatus {
    /// Moving towards the next stop
    InTransitTo,
    /// Standing at a stop
    StoppedAt,
    /// Any other status string, kept verbatim
    Other(String),
}

impl VehicleStatus {
    /// The wire representation
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::InTransitTo => "IN_TRANSIT_TO",
            Self::StoppedAt => "STOPPED_AT",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for VehicleStatus {
    fn from(s: &str) -> Self {
        match s {
            "IN_TRANSIT_TO" => Self::InTransitTo,
            "STOPPED_AT" => Self::StoppedAt,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for VehicleStatus {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<VehicleStatus> for String {
    fn from(status: VehicleStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A live vehicle position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// Vehicle id
    pub id: String,
    /// Rider-facing label, `N/A` when missing
    pub label: String,
    /// Movement status
    pub status: VehicleStatus,
    /// Latitude in degrees
    pub latitude: Option<f64>,
    /// Longitude in degrees
    pub longitude: Option<f64>,
    /// When the position was last updated, if the API gave a valid time
    pub last_updated: Option<DateTime<FixedOffset>>,
    /// Route id, `Unknown` when not linked
    pub route_id: String,
    /// Trip id, `Unknown` when not linked
    pub trip_id: String,
}

impl VehicleRecord {
    /// Map pin for this vehicle, when both coordinates are known
    #[must_use]
    pub fn map_pin(&self) -> Option<MapPin> {
        let (latitude, longitude) = self.latitude.zip(self.longitude)?;
        Some(MapPin {
            latitude,
            longitude,
            latitude_delta: PIN_DELTA,
            longitude_delta: PIN_DELTA,
            title: self.label.clone(),
            description: self.status.to_string(),
        })
    }
}

impl From<RawVehicle> for VehicleRecord {
    fn from(raw: RawVehicle) -> Self {
        let route_id = raw.relationships.route_id().unwrap_or(UNKNOWN_ID).to_string();
        let trip_id = raw.relationships.trip_id().unwrap_or(UNKNOWN_ID).to_string();
        let attributes = raw.attributes;

        Self {
            id: raw.id,
            label: attributes.label.unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
            status: attributes.current_status.map_or_else(
                || VehicleStatus::Other(String::new()),
                VehicleStatus::from,
            ),
            latitude: attributes.latitude,
            longitude: attributes.longitude,
            last_updated: attributes.updated_at,
            route_id,
            trip_id,
        }
    }
}

/// A map region centred on a vehicle, with a marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPin {
    /// Marker latitude
    pub latitude: f64,
    /// Marker longitude
    pub longitude: f64,
    /// Visible latitude span
    pub latitude_delta: f64,
    /// Visible longitude span
    pub longitude_delta: f64,
    /// Marker title (vehicle label)
    pub title: String,
    /// Marker description (vehicle status)
    pub description: String,
}
