//! Domain models for transit-live
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`VehicleRecord`] - A live vehicle position, mapped from a raw resource
//! - [`FilterSelection`] - Route/trip ids the list is restricted to
//! - [`PageCursor`] - Offset pagination state
//! - [`RouteOption`] / [`TripOption`] - Selectable filter values
//! - [`resource`] - Raw JSON:API documents

mod filter;
mod options;
mod page;
pub mod resource;
mod vehicle;

pub use filter::{FilterSelection, VehicleQuery};
pub use options::{RouteOption, TripOption};
pub use page::{FetchMode, PAGE_SIZE, PageCursor};
pub use resource::{Collection, RawRoute, RawTrip, RawVehicle, Single};
pub use vehicle::{MapPin, PIN_DELTA, UNKNOWN_ID, UNKNOWN_LABEL, VehicleRecord, VehicleStatus};
