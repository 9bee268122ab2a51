//! Raw JSON:API resources as returned by the transit API
//!
//! These mirror the wire format; the rest of the crate works with the
//! mapped records in [`super::VehicleRecord`] and [`super::RouteOption`].

use chrono::{DateTime, FixedOffset};
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};

/// A collection document: `{ data: [...], links: { next, prev } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection<T> {
    /// Resources on this page
    pub data: Vec<T>,
    /// Pagination links (absent on some endpoints)
    #[serde(default)]
    pub links: Links,
}

impl<T> Collection<T> {
    /// Build a collection from resources and an optional next link
    #[must_use]
    pub fn new(data: Vec<T>, next: Option<String>) -> Self {
        Self {
            data,
            links: Links { next, prev: None },
        }
    }

    /// Whether the server reports a further page
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.links.next.is_some()
    }
}

/// A single-resource document: `{ data: {...} }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Single<T> {
    /// The resource
    pub data: T,
}

/// Pagination links of a collection document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    /// Link to the next page, `null` on the last page
    #[serde(default)]
    pub next: Option<String>,
    /// Link to the previous page
    #[serde(default)]
    pub prev: Option<String>,
}

/// `{ type, id }` pointer to a related resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    /// Related resource id
    pub id: String,
    /// Related resource type (`route`, `trip`, ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// A relationship object; `data` is `null` when nothing is linked
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Linked resource, if any
    #[serde(default)]
    pub data: Option<ResourceIdentifier>,
}

impl Relationship {
    /// Relationship pointing at `id`
    #[must_use]
    pub fn to(id: &str) -> Self {
        Self {
            data: Some(ResourceIdentifier {
                id: id.to_string(),
                kind: None,
            }),
        }
    }

    fn id(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.id.as_str())
    }
}

/// `attributes` of a vehicle resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleAttributes {
    /// Vehicle label shown to riders
    #[serde(default)]
    pub label: Option<String>,
    /// `IN_TRANSIT_TO`, `STOPPED_AT`, `INCOMING_AT`, ...
    #[serde(default)]
    pub current_status: Option<String>,
    /// Latitude in degrees
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude in degrees
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Last position update; `None` when absent or not RFC 3339
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// A bad timestamp only blanks that vehicle's time, not the whole page
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| match DateTime::parse_from_rfc3339(&s) {
        Ok(timestamp) => Some(timestamp),
        Err(err) => {
            debug!("Ignoring unparseable updated_at {s:?}: {err}");
            None
        },
    }))
}

/// `relationships` of a vehicle resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRelationships {
    /// Route the vehicle is serving
    #[serde(default)]
    pub route: Option<Relationship>,
    /// Trip the vehicle is running
    #[serde(default)]
    pub trip: Option<Relationship>,
}

impl VehicleRelationships {
    /// Id of the linked route, if present
    #[must_use]
    pub fn route_id(&self) -> Option<&str> {
        self.route.as_ref().and_then(Relationship::id)
    }

    /// Id of the linked trip, if present
    #[must_use]
    pub fn trip_id(&self) -> Option<&str> {
        self.trip.as_ref().and_then(Relationship::id)
    }
}

/// A vehicle resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawVehicle {
    /// Vehicle id
    pub id: String,
    /// Vehicle attributes
    pub attributes: VehicleAttributes,
    /// Related route and trip
    #[serde(default)]
    pub relationships: VehicleRelationships,
}

/// `attributes` of a route resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteAttributes {
    /// Full route name
    #[serde(default)]
    pub long_name: String,
}

/// A route resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRoute {
    /// Route id
    pub id: String,
    /// Route attributes
    pub attributes: RouteAttributes,
}

/// `attributes` of a trip resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripAttributes {
    /// Destination sign text
    #[serde(default)]
    pub headsign: String,
}

/// A trip resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTrip {
    /// Trip id
    pub id: String,
    /// Trip attributes
    pub attributes: TripAttributes,
}
