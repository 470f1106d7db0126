use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "Unsupported JSON results in {}: expected an array or an object, found {found}",
        .path.display()
    )]
    UnsupportedJsonShape { path: PathBuf, found: &'static str },

    #[error("Prompt I/O error: {0}")]
    Prompt(#[source] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl SyncError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SyncError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
