//! Vehicle detail resolution
//!
//! The vehicle is fetched first; its route and trip are then fetched in
//! parallel and both must succeed. Ids missing from the returned lists are
//! not errors, they resolve to placeholder text.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;
use serde::Serialize;

use crate::api::ApiError;
use crate::core::models::{MapPin, VehicleRecord};
use crate::core::ports::TransitApi;

/// Shown when the vehicle's route id is not in the route response
pub const ROUTE_NOT_FOUND: &str = "Route ID not found";

/// Shown when the vehicle's trip id is not in the trip response
pub const TRIP_NOT_FOUND: &str = "Trip ID not found";

/// A vehicle with its route name and trip headsign
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleDetail {
    /// The vehicle
    pub vehicle: VehicleRecord,
    /// Route long name, or [`ROUTE_NOT_FOUND`]
    pub route_name: String,
    /// Trip headsign, or [`TRIP_NOT_FOUND`]
    pub trip_headsign: String,
}

impl VehicleDetail {
    /// Map pin for the vehicle, when its position is known
    #[must_use]
    pub fn map_pin(&self) -> Option<MapPin> {
        self.vehicle.map_pin()
    }
}

/// Fetch a vehicle, then its route and trip concurrently
pub async fn resolve_detail<A: TransitApi>(api: &A, id: &str) -> Result<VehicleDetail, ApiError> {
    let vehicle = VehicleRecord::from(api.get_vehicle(id).await?);

    let (routes, trips) = tokio::try_join!(
        api.list_routes(Some(vehicle.route_id.as_str())),
        api.list_trips(None, Some(vehicle.trip_id.as_str())),
    )?;

    let route_name = routes
        .data
        .into_iter()
        .find(|r| r.id == vehicle.route_id)
        .map_or_else(|| ROUTE_NOT_FOUND.to_string(), |r| r.attributes.long_name);
    let trip_headsign = trips
        .data
        .into_iter()
        .find(|t| t.id == vehicle.trip_id)
        .map_or_else(|| TRIP_NOT_FOUND.to_string(), |t| t.attributes.headsign);

    Ok(VehicleDetail {
        vehicle,
        route_name,
        trip_headsign,
    })
}

/// What the detail view shows
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DetailState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Resolution in progress
    Loading {
        /// Vehicle being resolved
        vehicle_id: String,
    },
    /// Resolved
    Ready {
        /// The resolved detail
        detail: Box<VehicleDetail>,
    },
    /// Resolution failed; terminal until the next open
    Failed {
        /// User-facing message
        message: String,
    },
}

#[derive(Debug, Default)]
struct DetailSlot {
    state: DetailState,
    generation: u64,
}

/// Detail view state with stale-result protection
///
/// Opening a second vehicle while the first is still resolving supersedes
/// it: the first result is dropped when it arrives.
#[derive(Debug)]
pub struct DetailController<A> {
    api: A,
    slot: Mutex<DetailSlot>,
}

impl<A: TransitApi> DetailController<A> {
    /// Controller in the idle state
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            slot: Mutex::new(DetailSlot::default()),
        }
    }

    /// Resolve `vehicle_id`; returns whether the result was applied
    pub async fn open(&self, vehicle_id: &str) -> bool {
        let generation = {
            let mut slot = self.slot();
            slot.generation += 1;
            slot.state = DetailState::Loading {
                vehicle_id: vehicle_id.to_string(),
            };
            slot.generation
        };

        let result = resolve_detail(&self.api, vehicle_id).await;

        let mut slot = self.slot();
        if slot.generation != generation {
            debug!("Discarding stale detail for vehicle {vehicle_id}");
            return false;
        }
        slot.state = match result {
            Ok(detail) => DetailState::Ready {
                detail: Box::new(detail),
            },
            Err(err) => DetailState::Failed {
                message: err.message().to_string(),
            },
        };
        true
    }

    /// Copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> DetailState {
        self.slot().state.clone()
    }

    /// The underlying API
    pub const fn api(&self) -> &A {
        &self.api
    }

    fn slot(&self) -> MutexGuard<'_, DetailSlot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
