//! Runtime configuration for the CLI.

use std::env;
use std::path::PathBuf;

use carassist_core::util::normalize_text_option;

pub const DB_PATH_ENV: &str = "CARASSIST_DB_PATH";

/// Resolve the database path: flag, then `CARASSIST_DB_PATH`, then the data dir
pub fn resolve_db_path(cli_db_path: Option<PathBuf>) -> PathBuf {
    cli_db_path
        .or_else(|| normalize_text_option(env::var(DB_PATH_ENV).ok()).map(PathBuf::from))
        .unwrap_or_else(default_db_path)
}

pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("carassist")
        .join("settings.db")
}
