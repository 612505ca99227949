// Rust guideline compliant 2026-10-16

//! Error types for the Shelf core library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Shelf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Shelf operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The book is already issued and cannot be issued again.
    #[error("Book already issued: {isbn}")]
    AlreadyIssued {
        /// ISBN of the offending book.
        isbn: String,
    },

    /// The book is on the shelf and cannot be returned.
    #[error("Book is already in library: {isbn}")]
    NotIssued {
        /// ISBN of the offending book.
        isbn: String,
    },

    /// No book carries the given ISBN.
    #[error("Book not found: {0}")]
    NotFound(String),

    /// Reading the backing file failed part-way.
    #[error("Could not load saved data from {}: {source}", .path.display())]
    LoadFailure {
        /// Backing file path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the backing file failed.
    #[error("Could not save data to {}: {source}", .path.display())]
    SaveFailure {
        /// Backing file path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid Book data.
    #[error("Invalid book: {0}")]
    InvalidBook(String),

    /// Invalid configuration value.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Returns a stable snake_case code for machine-readable output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Error::AlreadyIssued { .. } => "already_issued",
            Error::NotIssued { .. } => "not_issued",
            Error::NotFound(_) => "not_found",
            Error::LoadFailure { .. } => "load_failure",
            Error::SaveFailure { .. } => "save_failure",
            Error::InvalidBook(_) => "validation_error",
            Error::InvalidConfig(_) => "invalid_config",
            Error::Io(_) => "io_error",
            Error::Json(_) => "json_error",
            Error::Toml(_) => "toml_error",
        }
    }

    /// Returns true for errors raised by an illegal issue/return transition.
    pub fn is_transition(&self) -> bool {
        matches!(self, Error::AlreadyIssued { .. } | Error::NotIssued { .. })
    }
}
