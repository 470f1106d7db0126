use super::DocumentStore;
use crate::error::{Result, SyncError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: HashMap<PathBuf, String>,
    writes: Vec<PathBuf>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.files.insert(path.into(), text.into());
        self
    }

    pub fn get(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// Paths passed to [`DocumentStore::write`], in call order.
    pub fn writes(&self) -> &[PathBuf] {
        &self.writes
    }
}

impl DocumentStore for InMemoryStore {
    fn read(&self, path: &Path) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| SyncError::FileNotFound(path.to_path_buf()))
    }

    fn write(&mut self, path: &Path, text: &str) -> Result<()> {
        self.files.insert(path.to_path_buf(), text.to_string());
        self.writes.push(path.to_path_buf());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::commands::SyncPaths;

    pub const CHECKLIST: &str = "# QA Scenarios\n\
\n\
## Auth\n\
- [ ] TC-001: Login with valid credentials\n\
- [ ] TC-002: Login with wrong password\n\
- [ ] TC-003: Logout\n\
\n\
## Property\n\
- [ ] TC-004~TC-006: Property registration batch\n\
- [x] TC-007: Proposal list renders\n";

    pub struct StoreFixture {
        pub store: InMemoryStore,
        pub paths: SyncPaths,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            let paths = SyncPaths::new("/qa/QA_TEST_SCENARIOS.md", "/qa/TEST_RESULTS.md");
            let store = InMemoryStore::new().with_file(&paths.checklist, CHECKLIST);
            Self { store, paths }
        }

        pub fn with_file(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
            self.store = self.store.with_file(path, text);
            self
        }

        pub fn with_results(self, text: impl Into<String>) -> Self {
            let path = self.paths.results.clone();
            self.with_file(path, text)
        }

        pub fn checklist(&self) -> &str {
            self.store
                .get(&self.paths.checklist)
                .expect("fixture checklist exists")
        }
    }
}
