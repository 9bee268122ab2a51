//! Query parameter construction for the transit API
//!
//! Pure functions: they decide which JSON:API parameters a request carries,
//! the adapter only attaches them to a URL.

use crate::core::models::{PAGE_SIZE, VehicleQuery};

/// Ordered `(name, value)` pairs for a request's query string
pub type QueryParams = Vec<(&'static str, String)>;

/// Related resources requested inline with every vehicle page
pub const VEHICLE_INCLUDE: &str = "route,trip";

fn first_page() -> QueryParams {
    vec![("page[limit]", PAGE_SIZE.to_string()), ("page[offset]", "0".to_string())]
}

/// Parameters for `GET /vehicles`
///
/// Filters that are unset are omitted entirely rather than sent empty.
#[must_use]
pub fn vehicles_query(offset: usize, query: &VehicleQuery) -> QueryParams {
    let mut params = vec![
        ("page[limit]", PAGE_SIZE.to_string()),
        ("page[offset]", offset.to_string()),
        ("include", VEHICLE_INCLUDE.to_string()),
    ];
    if let Some(route) = query.route.as_deref().filter(|r| !r.is_empty()) {
        params.push(("filter[route]", route.to_string()));
    }
    if let Some(trip) = query.trip.as_deref().filter(|t| !t.is_empty()) {
        params.push(("filter[trip]", trip.to_string()));
    }
    params
}

/// Parameters for `GET /routes`
#[must_use]
pub fn routes_query(id: Option<&str>) -> QueryParams {
    let mut params = first_page();
    if let Some(id) = id.filter(|i| !i.is_empty()) {
        params.push(("filter[id]", id.to_string()));
    }
    params
}

/// Parameters for `GET /trips`
///
/// A trip id wins over a route id when both are given.
#[must_use]
pub fn trips_query(route_id: Option<&str>, trip_id: Option<&str>) -> QueryParams {
    let mut params = first_page();
    match (trip_id.filter(|t| !t.is_empty()), route_id.filter(|r| !r.is_empty())) {
        (Some(trip), _) => params.push(("filter[id]", trip.to_string())),
        (None, Some(route)) => params.push(("filter[route]", route.to_string())),
        (None, None) => {},
    }
    params
}
