//! Transit API port
//!
//! Defines the four read-only operations the controllers need from the
//! transit data service.

use std::future::Future;

use crate::api::ApiError;
use crate::core::models::{Collection, RawRoute, RawTrip, RawVehicle, VehicleQuery};

/// Read access to the transit data service
///
/// Implementations collapse every failure into an [`ApiError`] for the
/// endpoint family that was called, logging the underlying cause.
pub trait TransitApi: Send + Sync {
    /// One page of vehicles (page size 10) with route and trip included
    fn list_vehicles(
        &self,
        offset: usize,
        query: &VehicleQuery,
    ) -> impl Future<Output = Result<Collection<RawVehicle>, ApiError>> + Send;

    /// First page of routes, optionally restricted to one id
    fn list_routes(
        &self,
        id: Option<&str>,
    ) -> impl Future<Output = Result<Collection<RawRoute>, ApiError>> + Send;

    /// First page of trips, by trip id (preferred) or by route id
    fn list_trips(
        &self,
        route_id: Option<&str>,
        trip_id: Option<&str>,
    ) -> impl Future<Output = Result<Collection<RawTrip>, ApiError>> + Send;

    /// A single vehicle by id
    fn get_vehicle(&self, id: &str) -> impl Future<Output = Result<RawVehicle, ApiError>> + Send;
}
