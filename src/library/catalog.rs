//! Catalog of book records.
//!
//! An ordered sequence that can be searched and summarized. Mutating
//! operations write the catalog through the store before returning.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::store::Store;

use super::book::{Book, SearchField, Statistics};

/// In-memory catalog for one run of the program.
///
/// Insertion order is the display order. Duplicate titles are allowed;
/// there is no identifier beyond the title text itself.
///
/// Serializes as a bare JSON array of book objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Append a book to the end of the catalog and persist.
    ///
    /// No deduplication and no field validation; the append always
    /// succeeds and only the save can fail.
    pub fn add(&mut self, book: Book, store: &Store) -> Result<()> {
        self.books.push(book);
        store.save(self)
    }

    /// Remove the first book whose title equals `title` case-insensitively
    /// (exact match, not substring) and persist.
    ///
    /// Returns the removed book, or `None` when nothing matched; in that
    /// case the catalog and the file are left untouched.
    pub fn remove(&mut self, title: &str, store: &Store) -> Result<Option<Book>> {
        let needle = title.to_lowercase();

        match self.books.iter().position(|b| b.title.to_lowercase() == needle) {
            Some(pos) => {
                let book = self.books.remove(pos);
                store.save(self)?;
                Ok(Some(book))
            }
            None => Ok(None),
        }
    }

    /// Search books by field (case-insensitive substring match)
    pub fn search(&self, field: SearchField, query: &str) -> Vec<&Book> {
        let query = query.to_lowercase();

        self.books
            .iter()
            .filter(|book| {
                let haystack = match field {
                    SearchField::Title => &book.title,
                    SearchField::Author => &book.author,
                };
                haystack.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// All books in stored order, with their 1-based display position.
    ///
    /// The position is presentation-only; it is never persisted and is
    /// not an identifier.
    pub fn list(&self) -> impl Iterator<Item = (usize, &Book)> {
        self.books.iter().enumerate().map(|(i, book)| (i + 1, book))
    }

    /// Total count and percentage read, or `None` for an empty catalog
    pub fn statistics(&self) -> Option<Statistics> {
        if self.books.is_empty() {
            return None;
        }

        let total = self.books.len();
        let read = self.books.iter().filter(|b| b.read).count();
        let percent = read as f64 / total as f64 * 100.0;

        Some(Statistics {
            total,
            percent_read: (percent * 10.0).round() / 10.0,
        })
    }

    /// Get the number of books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
