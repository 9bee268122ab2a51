//! reqwest-backed transit API client
//!
//! Implements the `TransitApi` port over HTTP. Failures are logged with their
//! cause and returned as the endpoint family's [`ApiError`].

use std::time::Duration;

use log::{debug, error};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::api::{ApiError, Endpoint, QueryParams, routes_query, trips_query, vehicles_query};
use crate::config::ClientConfig;
use crate::core::models::{Collection, RawRoute, RawTrip, RawVehicle, Single, VehicleQuery};
use crate::core::ports::TransitApi;

/// Media type of every JSON:API request and response
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// Header carrying the optional API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Why an HTTP call failed, before it is collapsed into an [`ApiError`]
#[derive(Debug, Error)]
pub enum TransportError {
    /// The base URL could not be turned into a request URL
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Connection, timeout or body read failure
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered 404
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-success status
    #[error("unexpected status {status} from {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// The body was not the expected JSON document
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Transit API client over HTTP
#[derive(Debug, Clone)]
pub struct HttpTransitApi {
    client: Client,
    base_url: String,
}

impl HttpTransitApi {
    /// Build a client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not a valid header value or the
    /// HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_API_MEDIA_TYPE));
        if let Some(key) = config.api_key.as_deref().filter(|k| !k.is_empty()) {
            headers.insert(API_KEY_HEADER, HeaderValue::from_str(key)?);
        }

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("transit-live/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Base URL requests are made against
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, segments: &[&str], params: &QueryParams) -> Result<Url, TransportError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| TransportError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|()| TransportError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(name, value)| (*name, value.as_str())));
        }
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &QueryParams,
    ) -> Result<T, TransportError> {
        let url = self.url(segments, params)?;
        debug!("GET {url}");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        debug!("GET {url} -> {}", status.as_u16());

        if status == StatusCode::NOT_FOUND {
            return Err(TransportError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

fn coalesce<T>(endpoint: Endpoint, result: Result<T, TransportError>) -> Result<T, ApiError> {
    result.map_err(|err| {
        error!("Error fetching {}: {err}", endpoint.as_str());
        ApiError { endpoint }
    })
}

impl TransitApi for HttpTransitApi {
    async fn list_vehicles(
        &self,
        offset: usize,
        query: &VehicleQuery,
    ) -> Result<Collection<RawVehicle>, ApiError> {
        let params = vehicles_query(offset, query);
        coalesce(Endpoint::Vehicles, self.get(&["vehicles"], &params).await)
    }

    async fn list_routes(&self, id: Option<&str>) -> Result<Collection<RawRoute>, ApiError> {
        let params = routes_query(id);
        coalesce(Endpoint::Routes, self.get(&["routes"], &params).await)
    }

    async fn list_trips(
        &self,
        route_id: Option<&str>,
        trip_id: Option<&str>,
    ) -> Result<Collection<RawTrip>, ApiError> {
        let params = trips_query(route_id, trip_id);
        coalesce(Endpoint::Trips, self.get(&["trips"], &params).await)
    }

    async fn get_vehicle(&self, id: &str) -> Result<RawVehicle, ApiError> {
        let doc = self.get::<Single<RawVehicle>>(&["vehicles", id], &QueryParams::new()).await;
        coalesce(Endpoint::VehicleDetail, doc.map(|doc| doc.data))
    }
}
