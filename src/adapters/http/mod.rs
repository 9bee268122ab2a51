//! HTTP adapter for the transit API
//!
//! - [`HttpTransitApi`] - `TransitApi` implementation over reqwest

mod client;

pub use client::{API_KEY_HEADER, HttpTransitApi, JSON_API_MEDIA_TYPE, TransportError};
