//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `http/` - JSON:API transit service over reqwest

pub mod http;

pub use http::HttpTransitApi;
