//! Error handling module for the lexat CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::path::Path;

use lexa_grammar::UnknownLanguage;
use thiserror::Error;

/// Main error type for the lexat CLI application.
#[derive(Error, Debug)]
pub enum LexatError {
    /// Error in the configuration file or logging setup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A language name that no configuration answers to.
    #[error(transparent)]
    UnknownLanguage(#[from] UnknownLanguage),

    /// Error when reading an input file fails.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// One or more language configurations failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LexatError {
    /// Wraps an IO error with the path it happened on.
    pub fn file(path: &Path, err: std::io::Error) -> Self {
        LexatError::FileOperation(format!("{}: {}", path.display(), err))
    }
}

/// Result type alias using LexatError.
pub type Result<T> = std::result::Result<T, LexatError>;
