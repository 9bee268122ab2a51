//! Client-boundary error type
//!
//! Every failure inside the HTTP adapter (transport, status, decoding) is
//! logged where it happens and then collapsed into an [`ApiError`] that only
//! says which endpoint family failed.

use serde::Serialize;

/// Endpoint families of the transit API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// `GET /vehicles`
    Vehicles,
    /// `GET /routes`
    Routes,
    /// `GET /trips`
    Trips,
    /// `GET /vehicles/{id}`
    VehicleDetail,
}

impl Endpoint {
    /// User-facing message shown when a request to this family fails
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Vehicles => "Failed to fetch vehicle data. Check your connection or filters.",
            Self::Routes => "Failed to fetch route data.",
            Self::Trips => "Failed to fetch trip data.",
            Self::VehicleDetail => "Failed to fetch vehicle detail.",
        }
    }

    /// Short name used in log lines
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vehicles => "vehicles",
            Self::Routes => "routes",
            Self::Trips => "trips",
            Self::VehicleDetail => "vehicle_detail",
        }
    }
}

/// A failed API call, reduced to the endpoint family that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError {
    /// Which family of requests failed
    pub endpoint: Endpoint,
}

impl ApiError {
    /// Vehicle list fetch failed
    #[must_use]
    pub const fn vehicles() -> Self {
        Self {
            endpoint: Endpoint::Vehicles,
        }
    }

    /// Route fetch failed
    #[must_use]
    pub const fn routes() -> Self {
        Self {
            endpoint: Endpoint::Routes,
        }
    }

    /// Trip fetch failed
    #[must_use]
    pub const fn trips() -> Self {
        Self {
            endpoint: Endpoint::Trips,
        }
    }

    /// Single vehicle fetch failed (including unknown ids)
    #[must_use]
    pub const fn vehicle_detail() -> Self {
        Self {
            endpoint: Endpoint::VehicleDetail,
        }
    }

    /// The human-readable message for this failure
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.endpoint.failure_message()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ApiError {}
