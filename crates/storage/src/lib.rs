//! Bookrack Storage Layer
//!
//! This crate provides the persistent store for the Bookrack catalog.
//! It uses SQLite via sqlx with a single key-value table: each stored
//! document is one serialized text value under one key, overwritten
//! whole on every write.

pub mod connection;
pub mod kv;
pub mod migrations;

pub use connection::{connect, close, database_exists, DatabaseConfig, DbPool};
pub use migrations::{current_version, run_migrations, verify_integrity};
