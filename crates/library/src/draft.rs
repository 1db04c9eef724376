//! Raw user input for a catalog entry
//!
//! Form fields arrive as free text. A draft carries them unparsed and
//! resolves them into a typed [`Book`] only once validation has passed.

use bookrack_core::{Book, BookId, Validator};
use std::str::FromStr;

/// Parses free-text input into a numeric value.
///
/// Parse succeeds → the value; parse fails or input absent → the type's
/// default. Input is trimmed before parsing.
pub fn parse_or_default<T: FromStr + Default>(input: Option<&str>) -> T {
    input
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_default()
}

/// User-entered fields for a new book, prior to validation and coercion
#[derive(Debug, Clone, Default)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub series: Option<String>,
    pub pages: Option<String>,
    pub rating: Option<String>,
}

impl BookDraft {
    /// Creates a draft with the two required fields
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            ..Default::default()
        }
    }

    pub fn with_series(mut self, series: impl Into<String>) -> Self {
        self.series = Some(series.into());
        self
    }

    pub fn with_pages(mut self, pages: impl Into<String>) -> Self {
        self.pages = Some(pages.into());
        self
    }

    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    /// Resolves the draft into a book with the given identity.
    ///
    /// Absent series coerces to empty text; unparsable or absent numeric
    /// fields coerce to 0.
    pub fn into_book(self, id: BookId) -> Book {
        let pages: u32 = parse_or_default(self.pages.as_deref());
        let rating: i64 = parse_or_default(self.rating.as_deref());
        let series = self.series.unwrap_or_default();

        Book::new(id, self.title, self.author, series, pages, rating)
    }
}

impl Validator for BookDraft {
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

    #[test]
    fn test_parse_or_default_valid() {
        let pages: u32 = parse_or_default(Some("412"));
        assert_eq!(pages, 412);

        let rating: i64 = parse_or_default(Some(" 5 "));
        assert_eq!(rating, 5);
    }

    #[test]
    fn test_parse_or_default_unparsable() {
        let pages: u32 = parse_or_default(Some("lots"));
        assert_eq!(pages, 0);

        let rating: i64 = parse_or_default(Some(""));
        assert_eq!(rating, 0);
    }

    #[test]
    fn test_parse_or_default_absent() {
        let pages: u32 = parse_or_default(None);
        assert_eq!(pages, 0);
    }

    #[test]
    fn test_parse_or_default_negative_pages_rejected() {
        // pages is unsigned; negative input fails to parse and defaults
        let pages: u32 = parse_or_default(Some("-10"));
        assert_eq!(pages, 0);
    }

    #[test]
    fn test_draft_validation() {
        assert!(BookDraft::new("Dune", "Frank Herbert").is_valid());
        assert!(!BookDraft::new("", "Frank Herbert").is_valid());
        assert!(!BookDraft::new("Dune", "   ").is_valid());
    }

    #[test]
    fn test_into_book_coerces_fields() {
        let book = BookDraft::new("Dune", "Frank Herbert")
            .with_pages("412")
            .with_rating("banana")
            .into_book(BookId::from_millis(7));

        assert_eq!(book.id, BookId::from_millis(7));
        assert_eq!(book.pages, 412);
        assert_eq!(book.rating, 0);
        assert_eq!(book.series, "");
    }

    #[test]
    fn test_into_book_keeps_series() {
        let book = BookDraft::new("Dune", "Frank Herbert")
            .with_series("Dune Chronicles")
            .into_book(BookId::from_millis(1));

        assert_eq!(book.series, "Dune Chronicles");
    }
}
