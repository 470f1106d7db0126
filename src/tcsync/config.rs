use crate::commands::SyncPaths;
use crate::error::{Result, SyncError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".tcsync";
const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CHECKLIST: &str = "_AI_Doc/QA_TEST_SCENARIOS.md";
const DEFAULT_RESULTS: &str = "_AI_Doc/TEST_RESULTS.md";

/// Configuration for tcsync, stored in `<root>/.tcsync/config.json`.
///
/// Paths are relative to the project root unless absolute.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SyncConfig {
    #[serde(default = "default_checklist")]
    pub checklist: PathBuf,

    #[serde(default = "default_results")]
    pub results: PathBuf,
}

fn default_checklist() -> PathBuf {
    PathBuf::from(DEFAULT_CHECKLIST)
}

fn default_results() -> PathBuf {
    PathBuf::from(DEFAULT_RESULTS)
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            checklist: default_checklist(),
            results: default_results(),
        }
    }
}

impl SyncConfig {
    /// Load config from the project root, or return defaults if not found
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let config_path = root.as_ref().join(CONFIG_DIR).join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| SyncError::io(&config_path, e))?;
        serde_json::from_str(&content)
            .map_err(|e| SyncError::Config(format!("{}: {}", config_path.display(), e)))
    }

    pub fn with_checklist(mut self, path: impl Into<PathBuf>) -> Self {
        self.checklist = path.into();
        self
    }

    pub fn with_results(mut self, path: impl Into<PathBuf>) -> Self {
        self.results = path.into();
        self
    }

    /// Resolves both document paths against `root`.
    pub fn resolve<P: AsRef<Path>>(&self, root: P) -> SyncPaths {
        let root = root.as_ref();
        SyncPaths::new(root.join(&self.checklist), root.join(&self.results))
    }
}
