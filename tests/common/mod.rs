//! Common test utilities shared across test types
//!
//! - `fixtures.rs` - Raw resource builders and canned JSON:API documents
//! - `mocks.rs` - In-memory `TransitApi` with failure and latency controls
//! - `server.rs` - Local HTTP server for exercising the real client

pub mod mocks;
