use crate::models::errors::ValidationError;
use std::path::PathBuf;

/// Custom error type for the stashmark library
///
/// Store failures carry the path they happened on so the CLI can tell the
/// user which file is affected. Using `thiserror` for the `Error` impl and
/// `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum StashError {
    /// Store exists but could not be read (permissions, I/O fault)
    #[error("Failed to read bookmark store {path:?}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Store was read but is not valid JSON or has the wrong shape
    #[error("Bookmark store {path:?} is corrupt: {source}")]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Writing the store failed
    #[error("Failed to save bookmark store {path:?}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// User input that could not be parsed (e.g. reading time)
    #[error("Could not parse input: {0}")]
    InputParse(String),

    /// Bookmark rejected before it reached the store
    #[error("Invalid bookmark: {0}")]
    Validation(#[from] ValidationError),

    /// I/O errors outside the store (export files, config)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing/serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Line editor failures in the interactive shell
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Interactive input ended (EOF or Ctrl-C)
    #[error("Input closed")]
    InputClosed,

    /// Generic error for cases that don't fit other categories
    #[error("{0}")]
    Other(String),
}

/// Result type alias using StashError
pub type Result<T> = std::result::Result<T, StashError>;

impl StashError {
    /// True for the two load failures the session recovers from by starting
    /// with an empty collection
    pub fn is_recoverable_load(&self) -> bool {
        matches!(self, Self::Load { .. } | Self::CorruptStore { .. })
    }
}

impl From<serde_yaml::Error> for StashError {
    fn from(err: serde_yaml::Error) -> Self {
        StashError::Yaml(err.to_string())
    }
}
