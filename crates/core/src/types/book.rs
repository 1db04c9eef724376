//! Book domain model

use crate::types::{Timestamp, Validator};
use serde::{Deserialize, Serialize};

/// Unique identifier for a book
///
/// Ids are millisecond creation timestamps: unique within a catalog,
/// immutable once assigned, and monotonically increasing across additions.
/// Sorting by id therefore restores chronological entry order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    /// Creates a BookId from milliseconds since Unix epoch
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Creates a BookId from the given creation timestamp
    pub fn from_timestamp(ts: Timestamp) -> Self {
        Self(ts.as_millis())
    }

    /// Returns the id as milliseconds since Unix epoch
    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// Parses a BookId from its decimal string form
    pub fn from_string(s: &str) -> Result<Self, std::num::ParseIntError> {
        Ok(Self(s.trim().parse()?))
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Series the book belongs to; empty when it stands alone
    pub series: String,
    pub pages: u32,
    pub rating: i64,
}

impl Book {
    /// Creates a new book with the given identity and fields
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        series: impl Into<String>,
        pages: u32,
        rating: i64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            series: series.into(),
            pages,
            rating,
        }
    }
}

impl Validator for Book {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("Title cannot be empty".to_string());
        }

        if self.author.trim().is_empty() {
            errors.push("Author cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book::new(
            BookId::from_millis(1_700_000_000_000),
            "Dune",
            "Frank Herbert",
            "Dune Chronicles",
            412,
            5,
        )
    }

    #[test]
    fn test_book_id_ordering_is_chronological() {
        let earlier = BookId::from_millis(1_000);
        let later = BookId::from_millis(2_000);
        assert!(earlier < later);
    }

    #[test]
    fn test_book_id_from_string() {
        let id = BookId::from_string("1700000000000").unwrap();
        assert_eq!(id.as_millis(), 1_700_000_000_000);

        assert!(BookId::from_string("not a number").is_err());
    }

    #[test]
    fn test_book_id_display() {
        let id = BookId::from_millis(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_book_new() {
        let book = sample_book();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.series, "Dune Chronicles");
        assert_eq!(book.pages, 412);
        assert_eq!(book.rating, 5);
    }

    #[test]
    fn test_book_validation_success() {
        assert!(sample_book().is_valid());
    }

    #[test]
    fn test_book_validation_empty_title() {
        let mut book = sample_book();
        book.title = "   ".to_string();
        assert!(!book.is_valid());
    }

    #[test]
    fn test_book_validation_empty_author() {
        let mut book = sample_book();
        book.author = String::new();
        let errors = book.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Author"));
    }

    #[test]
    fn test_book_serde_round_trip() {
        let book = sample_book();
        let json = serde_json::to_string(&book).unwrap();
        let parsed: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, book);
    }

    #[test]
    fn test_book_id_serializes_as_integer() {
        let book = sample_book();
        let json = serde_json::to_string(&book).unwrap();
        assert!(json.contains("\"id\":1700000000000"));
    }

    #[test]
    fn test_book_deserializes_from_plain_record() {
        // The stored form is a flat JSON object with integer id
        let json = r#"{"id":1,"title":"Emma","author":"Jane Austen","series":"","pages":0,"rating":3}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.id, BookId::from_millis(1));
        assert_eq!(book.series, "");
        assert_eq!(book.rating, 3);
    }
}
