//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::fmt::Write as _;

use chrono::{DateTime, FixedOffset, Local};
use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::core::models::{MapPin, VehicleRecord, VehicleStatus};
use crate::core::services::{DetailState, FilterOptions, VehicleListState};

/// Placeholder for values the API did not report
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown when a settled query matched nothing
pub const NO_VEHICLES_MESSAGE: &str = "No vehicles found with this filter.";

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Format a coordinate with fixed decimals, or `N/A`
#[must_use]
pub fn format_coordinate(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{v:.decimals$}"))
}

/// Update time on the local clock, `HH:MM:SS`, or `N/A`
#[must_use]
pub fn format_time(timestamp: Option<&DateTime<FixedOffset>>) -> String {
    timestamp.map_or_else(
        || NOT_AVAILABLE.to_string(),
        |t| t.with_timezone(&Local).format("%H:%M:%S").to_string(),
    )
}

/// Status text colored by movement state
#[must_use]
pub fn colored_status(status: &VehicleStatus) -> ColoredString {
    match status {
        VehicleStatus::InTransitTo => status.as_str().green(),
        VehicleStatus::StoppedAt => status.as_str().yellow(),
        VehicleStatus::Other(s) => s.as_str().normal(),
    }
}

/// Result of a vehicle list query
#[derive(Debug, Serialize)]
pub struct VehicleListResult {
    /// `Filter (N routes, M trips)`
    pub filter_summary: String,
    /// Loaded vehicles
    pub vehicles: Vec<VehicleRecord>,
    /// Offset of the next page
    pub offset: usize,
    /// Whether another page may exist
    pub has_more: bool,
    /// Message of the last failed page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&VehicleListState> for VehicleListResult {
    fn from(state: &VehicleListState) -> Self {
        Self {
            filter_summary: state.filter().summary(),
            vehicles: state.records().to_vec(),
            offset: state.cursor().offset,
            has_more: state.has_more(),
            error: state.error().map(String::from),
        }
    }
}

impl VehicleListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable rendering
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}\n", self.filter_summary);

        if self.vehicles.is_empty() {
            match &self.error {
                Some(error) => {
                    let _ = writeln!(out, "{}", error.red());
                },
                None if !self.has_more => {
                    let _ = writeln!(out, "{NO_VEHICLES_MESSAGE}");
                },
                None => {},
            }
            return out;
        }

        for vehicle in &self.vehicles {
            let label = if vehicle.label.is_empty() { NOT_AVAILABLE } else { &vehicle.label };
            let _ = writeln!(out, "{}  {}", label.bold(), colored_status(&vehicle.status));
            let _ = writeln!(
                out,
                "  Lat/Lon: {}, {}",
                format_coordinate(vehicle.latitude, 4),
                format_coordinate(vehicle.longitude, 4)
            );
            let _ = writeln!(out, "  Update:  {}", format_time(vehicle.last_updated.as_ref()));
            let _ = writeln!(out, "  Route:   {}\n", vehicle.route_id);
        }

        let _ = writeln!(out, "{} vehicle(s) loaded", self.vehicles.len());
        if let Some(error) = &self.error {
            let _ = writeln!(out, "{}", error.red());
        } else if self.has_more {
            let _ = writeln!(out, "More vehicles available (next offset {})", self.offset);
        }
        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of a vehicle detail lookup
#[derive(Debug, Serialize)]
pub struct VehicleDetailResult {
    /// Resolution state
    #[serde(flatten)]
    pub state: DetailState,
    /// Map pin, when resolved with a known position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_pin: Option<MapPin>,
}

impl From<DetailState> for VehicleDetailResult {
    fn from(state: DetailState) -> Self {
        let map_pin = match &state {
            DetailState::Ready { detail } => detail.map_pin(),
            _ => None,
        };
        Self { state, map_pin }
    }
}

impl VehicleDetailResult {
    /// Whether the lookup failed
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self.state, DetailState::Failed { .. })
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable rendering
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        match &self.state {
            DetailState::Idle => {},
            DetailState::Loading { vehicle_id } => {
                let _ = writeln!(out, "Loading vehicle {vehicle_id}...");
            },
            DetailState::Failed { message } => {
                let _ = writeln!(out, "{}", message.red());
            },
            DetailState::Ready { detail } => {
                let v = &detail.vehicle;
                let _ = writeln!(out, "{}\n", format!("Vehicle {}", v.label).bold());
                let _ = writeln!(out, "Label:        {}", v.label);
                let _ = writeln!(out, "Status:       {}", colored_status(&v.status));
                let _ = writeln!(out, "Route ({}):  {}", v.route_id, detail.route_name);
                let _ = writeln!(out, "Trip ({}):  {}", v.trip_id, detail.trip_headsign);
                let _ = writeln!(
                    out,
                    "Position:     {}, {}",
                    format_coordinate(v.latitude, 5),
                    format_coordinate(v.longitude, 5)
                );
                let last_update =
                    v.last_updated.map_or_else(|| NOT_AVAILABLE.to_string(), |t| t.to_rfc3339());
                let _ = writeln!(out, "Last update:  {last_update}");
                if let Some(pin) = &self.map_pin {
                    let _ = writeln!(
                        out,
                        "Map:          pin at {:.5}, {:.5} (span {} x {})",
                        pin.latitude, pin.longitude, pin.latitude_delta, pin.longitude_delta
                    );
                }
            },
        }
        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Available filter options
#[derive(Debug, Serialize)]
pub struct FilterOptionsResult {
    /// Loaded options
    #[serde(flatten)]
    pub options: FilterOptions,
}

impl FilterOptionsResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable rendering
    #[must_use]
    pub fn to_human(&self) -> String {
        let options = &self.options;
        let mut out = String::new();

        if let Some(error) = &options.error {
            let _ = writeln!(out, "{}", error.red());
            let _ = writeln!(out, "Filter options may be incomplete.\n");
        }

        let _ = writeln!(out, "Routes ({}):", options.available_routes.len());
        for route in &options.available_routes {
            let _ = writeln!(out, "  {} ({})", route.display_name, route.id);
        }

        let _ = writeln!(out, "\nTrips ({}):", options.available_trips.len());
        for trip in &options.available_trips {
            let _ = writeln!(out, "  {} ({})", trip.display_name, trip.id);
        }

        if options.skipped_trip_requests > 0 {
            let _ = writeln!(
                out,
                "\n{} trip request(s) failed and were skipped",
                options.skipped_trip_requests
            );
        }
        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
