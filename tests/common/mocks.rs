//! Mock implementation of the `TransitApi` port
//!
//! Serves canned vehicles, routes and trips from memory. Individual
//! requests can be made to fail, and any vehicle request can be held open
//! on a `Notify` gate so tests control the order in which responses land.
//! Route and trip requests can wait on a `Barrier`, which only opens once
//! the expected number of requests are in flight together.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::{Barrier, Notify};
use transit_live::api::ApiError;
use transit_live::core::models::{
    Collection, PAGE_SIZE, RawRoute, RawTrip, RawVehicle, VehicleQuery,
};
use transit_live::core::ports::TransitApi;

/// In-memory transit API
#[derive(Default)]
pub struct MockTransitApi {
    /// Vehicle lists keyed by the comma-joined route filter
    vehicles: HashMap<Option<String>, Vec<RawVehicle>>,
    omit_next_link: bool,
    failing_offsets: HashSet<usize>,
    list_gates: HashMap<Option<String>, Arc<Notify>>,

    routes: Vec<RawRoute>,
    fail_routes: bool,
    trips: Vec<(String, RawTrip)>,
    failing_trip_routes: HashSet<String>,
    fail_trip_lookup: bool,
    route_barrier: Option<Arc<Barrier>>,
    trip_barrier: Option<Arc<Barrier>>,

    details: HashMap<String, RawVehicle>,
    detail_gates: HashMap<String, Arc<Notify>>,

    vehicle_requests: Mutex<Vec<(usize, VehicleQuery)>>,
    trip_requests: AtomicUsize,
}

impl MockTransitApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `vehicles` for the given route filter (`None` = unfiltered)
    pub fn with_vehicles(mut self, route: Option<&str>, vehicles: Vec<RawVehicle>) -> Self {
        for v in &vehicles {
            self.details.insert(v.id.clone(), v.clone());
        }
        self.vehicles.insert(route.map(String::from), vehicles);
        self
    }

    /// Never report a next link, even when more vehicles exist
    pub fn without_next_links(mut self) -> Self {
        self.omit_next_link = true;
        self
    }

    /// Fail every vehicle page requested at `offset`
    pub fn failing_at_offset(mut self, offset: usize) -> Self {
        self.failing_offsets.insert(offset);
        self
    }

    /// Hold vehicle list requests for `route` until the gate is notified
    pub fn gated_list(mut self, route: Option<&str>, gate: Arc<Notify>) -> Self {
        self.list_gates.insert(route.map(String::from), gate);
        self
    }

    pub fn with_routes(mut self, routes: Vec<RawRoute>) -> Self {
        self.routes = routes;
        self
    }

    pub fn failing_routes(mut self) -> Self {
        self.fail_routes = true;
        self
    }

    /// Trips served for `route_id`
    pub fn with_trips(mut self, route_id: &str, trips: Vec<RawTrip>) -> Self {
        self.trips.extend(trips.into_iter().map(|t| (route_id.to_string(), t)));
        self
    }

    /// Fail trip requests for one route
    pub fn failing_trips_for(mut self, route_id: &str) -> Self {
        self.failing_trip_routes.insert(route_id.to_string());
        self
    }

    /// Fail trip requests made by trip id
    pub fn failing_trip_lookup(mut self) -> Self {
        self.fail_trip_lookup = true;
        self
    }

    /// Hold every route request at `barrier`
    pub fn route_barrier(mut self, barrier: Arc<Barrier>) -> Self {
        self.route_barrier = Some(barrier);
        self
    }

    /// Hold every trip request at `barrier`
    pub fn trip_barrier(mut self, barrier: Arc<Barrier>) -> Self {
        self.trip_barrier = Some(barrier);
        self
    }

    /// Serve a vehicle for detail lookups only
    pub fn with_detail(mut self, vehicle: RawVehicle) -> Self {
        self.details.insert(vehicle.id.clone(), vehicle);
        self
    }

    /// Hold detail lookups for `id` until the gate is notified
    pub fn gated_detail(mut self, id: &str, gate: Arc<Notify>) -> Self {
        self.detail_gates.insert(id.to_string(), gate);
        self
    }

    /// Every vehicle list request made so far, as `(offset, query)`
    pub fn vehicle_requests(&self) -> Vec<(usize, VehicleQuery)> {
        self.vehicle_requests.lock().unwrap().clone()
    }

    pub fn vehicle_request_count(&self) -> usize {
        self.vehicle_requests.lock().unwrap().len()
    }

    pub fn trip_request_count(&self) -> usize {
        self.trip_requests.load(Ordering::SeqCst)
    }
}

impl TransitApi for MockTransitApi {
    async fn list_vehicles(
        &self,
        offset: usize,
        query: &VehicleQuery,
    ) -> Result<Collection<RawVehicle>, ApiError> {
        self.vehicle_requests.lock().unwrap().push((offset, query.clone()));

        if let Some(gate) = self.list_gates.get(&query.route) {
            gate.notified().await;
        }
        if self.failing_offsets.contains(&offset) {
            return Err(ApiError::vehicles());
        }

        let all = self.vehicles.get(&query.route).map(Vec::as_slice).unwrap_or_default();
        let page: Vec<RawVehicle> = all.iter().skip(offset).take(PAGE_SIZE).cloned().collect();
        let next = (offset + PAGE_SIZE < all.len() && !self.omit_next_link)
            .then(|| format!("/vehicles?page[offset]={}", offset + PAGE_SIZE));
        Ok(Collection::new(page, next))
    }

    async fn list_routes(&self, id: Option<&str>) -> Result<Collection<RawRoute>, ApiError> {
        if let Some(barrier) = &self.route_barrier {
            barrier.wait().await;
        }
        if self.fail_routes {
            return Err(ApiError::routes());
        }
        let routes = self
            .routes
            .iter()
            .filter(|r| id.is_none_or(|id| r.id == id))
            .take(PAGE_SIZE)
            .cloned()
            .collect();
        Ok(Collection::new(routes, None))
    }

    async fn list_trips(
        &self,
        route_id: Option<&str>,
        trip_id: Option<&str>,
    ) -> Result<Collection<RawTrip>, ApiError> {
        self.trip_requests.fetch_add(1, Ordering::SeqCst);
        if let Some(barrier) = &self.trip_barrier {
            barrier.wait().await;
        }

        let trips = if let Some(trip_id) = trip_id {
            if self.fail_trip_lookup {
                return Err(ApiError::trips());
            }
            self.trips.iter().filter(|(_, t)| t.id == trip_id).map(|(_, t)| t.clone()).collect()
        } else {
            let route_id = route_id.unwrap_or_default();
            if self.failing_trip_routes.contains(route_id) {
                return Err(ApiError::trips());
            }
            self.trips.iter().filter(|(r, _)| r == route_id).map(|(_, t)| t.clone()).collect()
        };
        Ok(Collection::new(trips, None))
    }

    async fn get_vehicle(&self, id: &str) -> Result<RawVehicle, ApiError> {
        if let Some(gate) = self.detail_gates.get(id) {
            gate.notified().await;
        }
        self.details.get(id).cloned().ok_or_else(ApiError::vehicle_detail)
    }
}
