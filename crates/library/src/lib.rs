//! Bookrack Library Management
//!
//! High-level layer that owns the canonical in-memory catalog and keeps the
//! persisted copy synchronized. Provides the add/update/remove/sort
//! operations the presentation layer drives.

pub mod draft;
pub mod error;
pub mod sort;
pub mod store;

pub use draft::{parse_or_default, BookDraft};
pub use error::{LibraryError, LibraryResult, Result};
pub use sort::SortOrder;
pub use store::{LibraryStore, BOOKS_KEY};

/// Library configuration
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    /// Database file path
    pub database_path: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            database_path: "bookrack.db".to_string(),
        }
    }
}

impl LibraryConfig {
    pub fn new(database_path: impl Into<String>) -> Self {
        Self {
            database_path: database_path.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = LibraryConfig::default();
        assert_eq!(config.database_path, "bookrack.db");
    }

    #[test]
    fn test_config_custom_path() {
        let config = LibraryConfig::new("custom.db");
        assert_eq!(config.database_path, "custom.db");
    }
}
