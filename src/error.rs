//! Error types for credit resolution and rendering

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CreditError {
    /// The graph failed to answer a query. Missing data is never reported here.
    #[error("Graph access failed: {0}")]
    Graph(String),

    #[error("Failed to load metadata from {path}: {reason}")]
    LoadError { path: String, reason: String },

    #[error("Invalid JSON-LD document: {0}")]
    InvalidDocument(String),

    #[error("Invalid locale catalog: {0}")]
    Locale(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(PathBuf),
}
