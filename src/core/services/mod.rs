//! Controllers and orchestration logic
//!
//! State machines are plain structs with pure transitions; the async
//! controllers wrap them and talk to the transit API only through the
//! [`TransitApi`](crate::core::ports::TransitApi) port.
//!
//! - [`vehicle_list`] - Paginated vehicle list with generation tokens
//! - [`filter_selection`] - Filter options and the in-progress filter edit
//! - [`detail`] - Vehicle detail resolution
//! - [`settled`] - Join-all combinator keeping successes and failures

pub mod detail;
pub mod filter_selection;
pub mod settled;
pub mod vehicle_list;

pub use detail::{
    DetailController, DetailState, ROUTE_NOT_FOUND, TRIP_NOT_FOUND, VehicleDetail, resolve_detail,
};
pub use filter_selection::{
    FilterDraft, FilterOptions, FilterSelectionController, load_filter_options,
};
pub use settled::{Settled, settle_all};
pub use vehicle_list::{PageRequest, VehicleListController, VehicleListState};
