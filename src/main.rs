//! transit-live - Live transit vehicle positions from the command line
//!
//! Lists vehicles page by page with optional route/trip filters, shows a
//! single vehicle with its route and trip, and lists the available filter
//! options.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

/// Main entry point for the transit-live CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
