//! Error types for the font audit library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the font audit library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Registry file could not be read or written as JSON
    #[error("Registry format error: {0}")]
    Json(#[from] serde_json::Error),

    /// Document bytes could not be loaded (malformed or unsupported)
    #[error("Failed to load document: {0}")]
    Load(String),

    /// A page's operator stream is unavailable
    #[error("Failed to read operator list: {0}")]
    OperatorList(String),

    /// Page index outside the document
    #[error("Page {0} does not exist")]
    PageNotFound(u32),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Invalid glob pattern
    #[error("Invalid glob pattern: {0}")]
    InvalidGlob(String),

    /// No files matched pattern
    #[error("No PDF files found matching pattern: {0}")]
    NoFilesMatched(String),

    /// Unrecognized license status
    #[error("Invalid license status: {0} (expected Free, Commercial or Unknown)")]
    InvalidStatus(String),
}
