//! Durable storage for the catalog.
//!
//! The whole catalog lives in a single JSON file. Every save rewrites the
//! file in full; there is no append mode and no partial write. A crash
//! between a mutation and its save loses that mutation only.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::library::Catalog;

/// File-backed store for one catalog
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store backed by `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The fixed catalog location, `~/.bookrack/library.txt`
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Failed to determine home directory")?;
        Ok(home.join(".bookrack").join("library.txt"))
    }

    /// Open the store at the default location
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the catalog from disk.
    ///
    /// A missing file means a fresh start and yields an empty catalog, as
    /// does a file with only whitespace. Unparseable content is reported
    /// and discarded; the next save overwrites it. Only an actual read
    /// failure is an error.
    pub fn load(&self) -> Result<Catalog> {
        if !self.path.exists() {
            return Ok(Catalog::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read catalog: {}", self.path.display()))?;

        if content.trim().is_empty() {
            return Ok(Catalog::new());
        }

        match serde_json::from_str(&content) {
            Ok(catalog) => Ok(catalog),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "catalog file is corrupted, starting with an empty catalog"
                );
                Ok(Catalog::new())
            }
        }
    }

    /// Save the catalog to disk, truncating and rewriting the file in full
    pub fn save(&self, catalog: &Catalog) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        let content = serde_json::to_string_pretty(catalog)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write catalog: {}", self.path.display()))
    }
}
