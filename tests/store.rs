//! Store Integration Tests
//!
//! Round-trip, missing-file, and corruption behavior of the catalog file.

use std::fs;

use bookrack::{Book, Catalog, Store};
use tempfile::TempDir;

fn temp_store() -> (TempDir, Store) {
    let dir = TempDir::new().unwrap();
    let store = Store::new(dir.path().join("library.txt"));
    (dir, store)
}

#[test]
fn test_load_missing_file_yields_empty_catalog() {
    let (_dir, store) = temp_store();

    let catalog = store.load().unwrap();
    assert!(catalog.is_empty());

    // Loading does not create the file
    assert!(!store.path().exists());
}

#[test]
fn test_round_trip_preserves_records_and_order() {
    let (_dir, store) = temp_store();
    let mut catalog = Catalog::new();

    catalog
        .add(Book::new("Dune", "Frank Herbert", "1965", "Sci-Fi", true), &store)
        .unwrap();
    catalog
        .add(Book::new("1984", "George Orwell", "1949", "Dystopia", false), &store)
        .unwrap();
    catalog
        .add(Book::new("Dune", "Frank Herbert", "1965", "Sci-Fi", false), &store)
        .unwrap();

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded, catalog);

    let titles: Vec<_> = reloaded.list().map(|(_, b)| b.title.clone()).collect();
    assert_eq!(titles, vec!["Dune", "1984", "Dune"]);
}

#[test]
fn test_empty_file_yields_empty_catalog() {
    let (_dir, store) = temp_store();

    fs::write(store.path(), "").unwrap();
    assert!(store.load().unwrap().is_empty());

    fs::write(store.path(), "  \n\t\n").unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_corrupt_file_yields_empty_catalog() {
    let (_dir, store) = temp_store();

    fs::write(store.path(), "{this is not json at all").unwrap();
    let catalog = store.load().unwrap();
    assert!(catalog.is_empty());

    // Valid JSON of the wrong shape counts as corrupt too
    fs::write(store.path(), "{\"Title\": \"Dune\"}").unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_corrupt_file_is_overwritten_on_next_save() {
    let (_dir, store) = temp_store();

    fs::write(store.path(), "garbage").unwrap();
    let mut catalog = store.load().unwrap();

    catalog
        .add(Book::new("Dune", "Frank Herbert", "1965", "Sci-Fi", true), &store)
        .unwrap();

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn test_save_rewrites_file_in_full() {
    let (_dir, store) = temp_store();
    let mut catalog = Catalog::new();

    catalog
        .add(Book::new("Dune", "Frank Herbert", "1965", "Sci-Fi", true), &store)
        .unwrap();
    catalog
        .add(Book::new("1984", "George Orwell", "1949", "Dystopia", false), &store)
        .unwrap();

    catalog.remove("dune", &store).unwrap();

    // The shrunk catalog replaces the old content entirely
    let reloaded = store.load().unwrap();
    assert_eq!(reloaded.len(), 1);
    let titles: Vec<_> = reloaded.list().map(|(_, b)| b.title.clone()).collect();
    assert_eq!(titles, vec!["1984"]);
}

#[test]
fn test_persisted_format_is_array_with_pascal_case_keys() {
    let (_dir, store) = temp_store();
    let mut catalog = Catalog::new();

    catalog
        .add(Book::new("Dune", "Frank Herbert", "1965", "Sci-Fi", true), &store)
        .unwrap();

    let content = fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();

    let books = value.as_array().unwrap();
    assert_eq!(books.len(), 1);

    let book = books[0].as_object().unwrap();
    let mut keys: Vec<_> = book.keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, vec!["Author", "Genre", "Read", "Title", "Year"]);

    assert_eq!(book["Title"], "Dune");
    assert_eq!(book["Year"], "1965");
    assert_eq!(book["Read"], true);
}

#[test]
fn test_save_creates_parent_directory() {
    let dir = TempDir::new().unwrap();
    let store = Store::new(dir.path().join("nested").join("library.txt"));

    store.save(&Catalog::new()).unwrap();
    assert!(store.path().exists());
}
