//! Centralized path definitions for transit-live
//!
//! The only file transit-live reads is its optional user configuration:
//!
//! ```text
//! <config dir>/transit-live/
//! └── config.toml               # API base URL, key, timeout
//! ```
//!
//! `<config dir>` is the platform configuration directory (`~/.config` on
//! Linux), falling back to the home directory.

use std::path::PathBuf;

/// Directory name under the platform config directory
pub const CONFIG_DIR_NAME: &str = "transit-live";

/// Configuration filename
pub const CONFIG_FILE: &str = "config.toml";

/// Get the configuration directory.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(CONFIG_DIR_NAME)
}

/// Get the configuration file path.
///
/// Returns `<config dir>/transit-live/config.toml`.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}
