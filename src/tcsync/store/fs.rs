use super::DocumentStore;
use crate::error::{Result, SyncError};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads and writes documents on the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentStore for FileStore {
    fn read(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SyncError::FileNotFound(path.to_path_buf()),
            _ => SyncError::io(path, e),
        })
    }

    fn write(&mut self, path: &Path, text: &str) -> Result<()> {
        fs::write(path, text).map_err(|e| SyncError::io(path, e))
    }
}
