//! Filter options and the in-progress filter edit
//!
//! Options are fetched once: the first page of routes, then the trips of
//! every route in parallel. A failed trip request only shrinks the option
//! list; a failed route request is the only reported error.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, warn};
use serde::Serialize;

use super::settled::settle_all;
use crate::core::models::{FilterSelection, RouteOption, TripOption};
use crate::core::ports::TransitApi;

/// Selectable routes and trips
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Routes from the first route page
    pub available_routes: Vec<RouteOption>,
    /// Trips of those routes, de-duplicated by id
    pub available_trips: Vec<TripOption>,
    /// Whether options are being fetched
    pub loading: bool,
    /// Set only when the route request failed
    pub error: Option<String>,
    /// Trip requests that failed and were left out
    pub skipped_trip_requests: usize,
}

/// Fetch routes, then every route's trips concurrently
pub async fn load_filter_options<A: TransitApi>(api: &A) -> FilterOptions {
    let routes = match api.list_routes(None).await {
        Ok(doc) => doc.data,
        Err(err) => {
            return FilterOptions {
                error: Some(err.message().to_string()),
                ..FilterOptions::default()
            };
        },
    };

    let trip_requests = routes.iter().map(|route| api.list_trips(Some(route.id.as_str()), None));
    let settled = settle_all(trip_requests).await;
    if !settled.all_fulfilled() {
        warn!(
            "{} of {} trip request(s) failed; filter options are incomplete",
            settled.rejected.len(),
            routes.len()
        );
    }

    let mut available_trips: Vec<TripOption> = Vec::new();
    for trip in settled.fulfilled.into_iter().flat_map(|doc| doc.data) {
        if !available_trips.iter().any(|t| t.id == trip.id) {
            available_trips.push(TripOption::from(trip));
        }
    }
    debug!("Loaded {} route(s) and {} trip(s)", routes.len(), available_trips.len());

    FilterOptions {
        available_routes: routes.into_iter().map(RouteOption::from).collect(),
        available_trips,
        loading: false,
        error: None,
        skipped_trip_requests: settled.rejected.len(),
    }
}

/// Holds the filter options for one editing session
#[derive(Debug)]
pub struct FilterSelectionController<A> {
    api: A,
    options: Mutex<FilterOptions>,
}

impl<A: TransitApi> FilterSelectionController<A> {
    /// Controller with no options loaded
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            options: Mutex::new(FilterOptions::default()),
        }
    }

    /// Fetch routes and trips, replacing the current options
    pub async fn load(&self) -> FilterOptions {
        self.options().loading = true;
        let loaded = load_filter_options(&self.api).await;
        let mut options = self.options();
        *options = loaded;
        options.clone()
    }

    /// Copy of the current options
    #[must_use]
    pub fn snapshot(&self) -> FilterOptions {
        self.options().clone()
    }

    /// The underlying API
    pub const fn api(&self) -> &A {
        &self.api
    }

    fn options(&self) -> MutexGuard<'_, FilterOptions> {
        self.options.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// An edit of the committed filter that is applied only on request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDraft {
    committed: FilterSelection,
    draft: FilterSelection,
}

impl FilterDraft {
    /// Start editing from the committed selection
    #[must_use]
    pub fn open(committed: FilterSelection) -> Self {
        Self {
            draft: committed.clone(),
            committed,
        }
    }

    /// The selection as currently edited
    #[must_use]
    pub const fn selection(&self) -> &FilterSelection {
        &self.draft
    }

    /// Whether the edit differs from the committed selection
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.draft != self.committed
    }

    /// Toggle a route in the draft
    pub fn toggle_route(&mut self, id: &str) {
        self.draft.toggle_route(id);
    }

    /// Toggle a trip in the draft
    pub fn toggle_trip(&mut self, id: &str) {
        self.draft.toggle_trip(id);
    }

    /// Commit the draft; the returned selection goes to the vehicle list
    pub fn apply(&mut self) -> FilterSelection {
        self.committed = self.draft.clone();
        self.committed.clone()
    }

    /// Clear everything and commit the empty selection immediately
    pub fn reset(&mut self) -> FilterSelection {
        self.draft = FilterSelection::default();
        self.apply()
    }

    /// Drop uncommitted edits
    pub fn close(&mut self) {
        self.draft = self.committed.clone();
    }
}
