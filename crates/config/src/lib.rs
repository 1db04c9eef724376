//! Bookrack Configuration System
//!
//! Settings live in a single TOML file in the platform config directory.
//! Invalid configs fall back to defaults with warnings, writes are atomic,
//! and all errors are handled via Result types.

mod error;
mod manager;
mod persistence;

pub use error::{ConfigError, ConfigResult};
pub use manager::ConfigManager;
pub use persistence::ConfigPersistence;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Path to the catalog database file
    pub database_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

impl Config {
    /// Creates a config pointing at a custom database path
    pub fn with_database_path(path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: path.into(),
        }
    }
}

/// Returns the default database location.
///
/// Follows the XDG base directory specification via the platform data
/// directory; falls back to the working directory when no home can be
/// resolved.
pub fn default_database_path() -> PathBuf {
    ProjectDirs::from("", "", "bookrack")
        .map(|dirs| dirs.data_dir().join("bookrack.db"))
        .unwrap_or_else(|| PathBuf::from("bookrack.db"))
}
