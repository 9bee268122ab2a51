//! Paginated vehicle list
//!
//! [`VehicleListState`] is the state machine: `reset` and `begin_load_more`
//! issue [`PageRequest`] tickets, `complete` applies a finished request.
//! Every ticket carries the generation it was issued under; a reset bumps the
//! generation, so results of superseded requests are dropped on completion.
//!
//! [`VehicleListController`] drives the state machine against a
//! [`TransitApi`]. Its state lock is never held across an await, so a display
//! layer can call it concurrently from a single event loop.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;

use crate::api::ApiError;
use crate::core::models::{
    Collection, FetchMode, FilterSelection, PageCursor, RawVehicle, VehicleQuery, VehicleRecord,
};
use crate::core::ports::TransitApi;

/// A page fetch issued by the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Generation the request belongs to
    pub generation: u64,
    /// Offset to fetch
    pub offset: usize,
    /// How the page is merged on completion
    pub mode: FetchMode,
    /// Filters the page is fetched with
    pub query: VehicleQuery,
}

/// Vehicle list state
#[derive(Debug, Clone, Default)]
pub struct VehicleListState {
    records: Vec<VehicleRecord>,
    loading: bool,
    error: Option<String>,
    cursor: PageCursor,
    filter: FilterSelection,
    generation: u64,
}

impl VehicleListState {
    /// Empty state for `filter`; nothing is fetched until [`Self::reset`]
    #[must_use]
    pub fn new(filter: FilterSelection) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    /// Loaded records, in page order
    #[must_use]
    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    /// Whether a request of the current generation is outstanding
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed page, if any
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Pagination cursor
    #[must_use]
    pub const fn cursor(&self) -> PageCursor {
        self.cursor
    }

    /// Whether another page may be loaded
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.cursor.has_more
    }

    /// Active filter
    #[must_use]
    pub const fn filter(&self) -> &FilterSelection {
        &self.filter
    }

    /// Current generation
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Settled with no matches: not loading, no error, no records, no more pages
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        !self.loading && self.error.is_none() && self.records.is_empty() && !self.cursor.has_more
    }

    /// Start a new query for `filter` from offset 0
    ///
    /// Clears records, error and cursor and supersedes any outstanding
    /// request. Not subject to the single-flight gate.
    pub fn reset(&mut self, filter: FilterSelection) -> PageRequest {
        self.generation += 1;
        self.filter = filter;
        self.records.clear();
        self.error = None;
        self.cursor = PageCursor::start();
        self.loading = true;

        PageRequest {
            generation: self.generation,
            offset: 0,
            mode: FetchMode::Replace,
            query: self.filter.to_query(),
        }
    }

    /// Request the next page, unless pagination stopped or a request is outstanding
    pub fn begin_load_more(&mut self) -> Option<PageRequest> {
        if !self.cursor.has_more || self.loading {
            return None;
        }
        self.loading = true;
        self.error = None;

        Some(PageRequest {
            generation: self.generation,
            offset: self.cursor.offset,
            mode: FetchMode::Append,
            query: self.filter.to_query(),
        })
    }

    /// Apply the outcome of `request`
    ///
    /// Returns false, leaving the state untouched, when the request belongs
    /// to an older generation.
    pub fn complete(
        &mut self,
        request: &PageRequest,
        result: Result<Collection<RawVehicle>, ApiError>,
    ) -> bool {
        if request.generation != self.generation {
            debug!(
                "Discarding stale vehicle page (offset {}, generation {} != {})",
                request.offset, request.generation, self.generation
            );
            return false;
        }
        self.loading = false;

        match result {
            Ok(page) => {
                let server_has_next = page.has_next();
                let page: Vec<VehicleRecord> = page.data.into_iter().map(VehicleRecord::from).collect();
                let received = page.len();
                match request.mode {
                    FetchMode::Replace => self.records = page,
                    FetchMode::Append => self.records.extend(page),
                }
                self.cursor.advance(received, server_has_next);
                debug!(
                    "Vehicle page at offset {} gave {received} record(s), has_more={}",
                    request.offset, self.cursor.has_more
                );
            },
            Err(err) => {
                self.error = Some(err.message().to_string());
                self.cursor.halt();
            },
        }
        true
    }
}

/// Drives a [`VehicleListState`] against a transit API
#[derive(Debug)]
pub struct VehicleListController<A> {
    api: A,
    state: Mutex<VehicleListState>,
}

impl<A: TransitApi> VehicleListController<A> {
    /// Controller with no filter; call [`Self::refresh`] to load the first page
    #[must_use]
    pub fn new(api: A) -> Self {
        Self::with_filter(api, FilterSelection::default())
    }

    /// Controller starting from `filter`; nothing is fetched yet
    #[must_use]
    pub fn with_filter(api: A, filter: FilterSelection) -> Self {
        Self {
            api,
            state: Mutex::new(VehicleListState::new(filter)),
        }
    }

    /// Replace the filter and reload from offset 0
    ///
    /// Returns whether the result was applied (false if a newer query
    /// superseded it while in flight).
    pub async fn set_filter(&self, filter: FilterSelection) -> bool {
        let request = self.state().reset(filter);
        self.fetch(request).await
    }

    /// Reload the current filter from offset 0
    pub async fn refresh(&self) -> bool {
        let filter = self.state().filter.clone();
        self.set_filter(filter).await
    }

    /// Load the next page
    ///
    /// Returns false without fetching when pagination stopped or a request
    /// is already outstanding.
    pub async fn load_more(&self) -> bool {
        let Some(request) = self.state().begin_load_more() else {
            return false;
        };
        self.fetch(request).await
    }

    /// Copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> VehicleListState {
        self.state().clone()
    }

    /// The underlying API
    pub const fn api(&self) -> &A {
        &self.api
    }

    async fn fetch(&self, request: PageRequest) -> bool {
        let result = self.api.list_vehicles(request.offset, &request.query).await;
        self.state().complete(&request, result)
    }

    fn state(&self) -> MutexGuard<'_, VehicleListState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
