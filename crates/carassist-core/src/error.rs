//! Error types for carassist-core

use thiserror::Error;

/// Result type alias using carassist-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in carassist-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// `SQLite` error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored or supplied value could not be interpreted
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Key is not part of the preference layout
    #[error("Unknown preference key: {0}")]
    UnknownKey(String),
}
