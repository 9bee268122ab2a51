//! Transport-agnostic API layer
//!
//! Types and pure functions shared by every implementation of the
//! [`TransitApi`](crate::core::ports::TransitApi) port:
//!
//! - **Errors**: [`ApiError`] is the only error that crosses the client boundary
//! - **Queries**: JSON:API pagination, include and filter parameters

mod error;
mod query;

pub use error::{ApiError, Endpoint};
pub use query::{QueryParams, VEHICLE_INCLUDE, routes_query, trips_query, vehicles_query};
