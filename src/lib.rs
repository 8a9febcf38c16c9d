//! bookrack - Personal book-catalog manager
//!
//! A text-menu program for keeping a small catalog of books in a single
//! JSON file.
//!
//! # Architecture
//!
//! The core is split into two pieces:
//! - The [`Store`] owns the backing file and knows how to load and save
//!   the whole catalog (missing or corrupt files yield an empty catalog).
//! - The [`Catalog`] is the in-memory ordered sequence of book records;
//!   every mutating operation writes the full catalog back through the
//!   store before returning.
//!
//! Everything interactive (menu, prompts, colors) lives in [`ui`] and
//! never leaks into the catalog or store.
//!
//! # Modules
//!
//! - `library`: Data structures (Book, Catalog) and catalog operations
//! - `store`: Durable load/save of the catalog file
//! - `ui`: Interactive menu surface

pub mod library;
pub mod store;
pub mod ui;

// Re-export main types at crate root for convenience
pub use library::{Book, Catalog, SearchField, Statistics};
pub use store::Store;
