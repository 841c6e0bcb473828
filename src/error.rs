//! Error types for loading station configuration documents.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a configuration document from disk
#[derive(Error, Debug)]
pub enum LoadError {
    /// The document does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The document exists but could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON
    #[error("JSON parsing error in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Path of the document that failed to load
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::NotFound(path) => path,
            LoadError::Io { path, .. } => path,
            LoadError::Json { path, .. } => path,
        }
    }
}
