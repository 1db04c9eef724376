//! Domain types for Bookrack
//!
//! This module contains the domain models organized by responsibility:
//! - `book`: the Book catalog entry and its identifier
//! - `common`: shared traits and utilities

mod book;
mod common;

// Re-export all public types
pub use book::{Book, BookId};
pub use common::{Timestamp, Validator};
