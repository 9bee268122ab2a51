//! Core domain logic for transit-live
//!
//! This module contains the models and controllers with no direct I/O.
//! All network access is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`VehicleRecord`, `FilterSelection`, `PageCursor`)
//! - `services/` - Controllers (vehicle list, filter selection, detail)
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
