use std::io;

use carassist_core::PreferenceKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] carassist_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Unknown preference key: {0} (run `carassist keys` to list them)")]
    UnknownKey(String),
    #[error("Invalid value for {key}: expected {expected}, got {value}")]
    InvalidValue {
        key: String,
        expected: PreferenceKind,
        value: String,
    },
}
