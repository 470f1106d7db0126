//! # Storage Layer
//!
//! Documents are plain text files that are read whole and written whole. The
//! [`DocumentStore`] trait hides where they live so the command layer can be
//! tested without touching the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage on the local filesystem
//! - [`memory::InMemoryStore`]: map of paths to text, records writes for tests
//!
//! ## Write Discipline
//!
//! Commands read every input they need before calling [`DocumentStore::write`],
//! and call it at most once per document. A fatal read error therefore leaves
//! the checklist exactly as it was.

use crate::error::Result;
use std::path::Path;

pub mod fs;
pub mod memory;

pub trait DocumentStore {
    /// Read the whole document as UTF-8 text.
    ///
    /// Fails with `SyncError::FileNotFound` when the path does not exist.
    fn read(&self, path: &Path) -> Result<String>;

    /// Replace the document with `text`.
    fn write(&mut self, path: &Path, text: &str) -> Result<()>;
}
