//! Book record and related value types.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One book in the catalog.
///
/// Persisted JSON keys are `Title`, `Author`, `Year`, `Genre`, `Read`.
/// The year is deliberately free text; nothing parses or validates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    /// Book title (also the removal key, compared case-insensitively)
    pub title: String,

    /// Author name
    pub author: String,

    /// Publication year, unvalidated text
    pub year: String,

    /// Genre label
    pub genre: String,

    /// Whether the book has been read
    pub read: bool,
}

impl Book {
    /// Create a new book record
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            genre: genre.into(),
            read,
        }
    }
}

/// Field a search runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Match against the title
    Title,

    /// Match against the author
    Author,
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchField::Title => write!(f, "title"),
            SearchField::Author => write!(f, "author"),
        }
    }
}

impl std::str::FromStr for SearchField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "1" | "title" => Ok(SearchField::Title),
            "2" | "author" => Ok(SearchField::Author),
            _ => anyhow::bail!("Unknown search field: {}", s),
        }
    }
}

/// Catalog totals reported by [`Catalog::statistics`](super::Catalog::statistics)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Total number of records
    pub total: usize,

    /// Percentage of records marked read, rounded to one decimal place
    pub percent_read: f64,
}
