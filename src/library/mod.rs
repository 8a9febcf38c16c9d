//! Book catalog domain.
//!
//! The catalog is an ordered, in-memory sequence of book records loaded
//! once at startup. Mutating operations persist the whole catalog through
//! the store before returning, so the file on disk always reflects the
//! last successful mutation.
//!
//! # Storage Layout
//!
//! ```text
//! ~/.bookrack/
//! └── library.txt    # JSON array of book objects
//! ```

pub mod book;
pub mod catalog;

pub use book::{Book, SearchField, Statistics};
pub use catalog::Catalog;
