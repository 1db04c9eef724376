//! Sort engine
//!
//! Four total orders over the catalog, each applied as a stable in-place
//! sort so entries the comparator considers equal keep their relative
//! positions.

use bookrack_core::Book;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The orderings the catalog can be rearranged into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Lexicographic by title, case-folded
    Title,
    /// Lexicographic by author, case-folded
    Author,
    /// Ascending by rating
    Rating,
    /// Ascending by id, i.e. chronological entry order
    Entry,
}

impl SortOrder {
    /// Reorders `books` in place according to this ordering
    pub fn apply(&self, books: &mut [Book]) {
        match self {
            Self::Title => books.sort_by(|a, b| compare_text(&a.title, &b.title)),
            Self::Author => books.sort_by(|a, b| compare_text(&a.author, &b.author)),
            Self::Rating => books.sort_by(|a, b| a.rating.cmp(&b.rating)),
            Self::Entry => books.sort_by(|a, b| a.id.cmp(&b.id)),
        }
    }

    /// All orderings, in presentation order
    pub fn all() -> [SortOrder; 4] {
        [Self::Title, Self::Author, Self::Rating, Self::Entry]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Rating => "rating",
            Self::Entry => "entry",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "rating" => Ok(Self::Rating),
            "entry" => Ok(Self::Entry),
            other => Err(format!(
                "unknown sort order '{}' (expected title, author, rating, or entry)",
                other
            )),
        }
    }
}

/// Case-folded lexicographic comparison, with the raw strings as a final
/// tie-break so equal-modulo-case values still order deterministically.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
