//! Route/trip filter selection
//!
//! A [`FilterSelection`] is an ordered list of ids with set semantics.
//! An empty selection means "no filter".

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Route and trip ids the vehicle list is restricted to
#[derive(Debug, Clone, Default, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Selected route ids, in selection order
    #[serde(default)]
    pub route_ids: Vec<String>,
    /// Selected trip ids, in selection order
    #[serde(default)]
    pub trip_ids: Vec<String>,
}

impl FilterSelection {
    /// Build a selection, dropping duplicate and empty ids
    #[must_use]
    pub fn new<R, T>(route_ids: R, trip_ids: T) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            route_ids: unique(route_ids),
            trip_ids: unique(trip_ids),
        }
    }

    /// True when neither routes nor trips are selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.route_ids.is_empty() && self.trip_ids.is_empty()
    }

    /// Add the route if absent, remove it if present
    pub fn toggle_route(&mut self, id: &str) {
        toggle(&mut self.route_ids, id);
    }

    /// Add the trip if absent, remove it if present
    pub fn toggle_trip(&mut self, id: &str) {
        toggle(&mut self.trip_ids, id);
    }

    /// Request-level form of this selection (comma-joined ids)
    #[must_use]
    pub fn to_query(&self) -> VehicleQuery {
        VehicleQuery {
            route: join(&self.route_ids),
            trip: join(&self.trip_ids),
        }
    }

    /// `Filter (N routes, M trips)` summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Filter ({} routes, {} trips)", self.route_ids.len(), self.trip_ids.len())
    }
}

impl PartialEq for FilterSelection {
    fn eq(&self, other: &Self) -> bool {
        same_set(&self.route_ids, &other.route_ids) && same_set(&self.trip_ids, &other.trip_ids)
    }
}

/// Filters as sent to `GET /vehicles`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VehicleQuery {
    /// Comma-separated route ids, `None` when unfiltered
    pub route: Option<String>,
    /// Comma-separated trip ids, `None` when unfiltered
    pub trip: Option<String>,
}

fn unique<I>(ids: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for id in ids {
        let id = id.into();
        if !id.is_empty() && !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

fn toggle(ids: &mut Vec<String>, id: &str) {
    if let Some(pos) = ids.iter().position(|i| i == id) {
        ids.remove(pos);
    } else {
        ids.push(id.to_string());
    }
}

fn join(ids: &[String]) -> Option<String> {
    if ids.is_empty() { None } else { Some(ids.join(",")) }
}

fn same_set(a: &[String], b: &[String]) -> bool {
    a.iter().collect::<BTreeSet<_>>() == b.iter().collect::<BTreeSet<_>>()
}
