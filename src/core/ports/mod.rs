//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the controllers and the
//! transit data service.
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core logic depends only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: Mock implementations for unit tests
//! - **Flexibility**: Swap the HTTP client without changing controller logic

mod transit_api;

pub use transit_api::TransitApi;
