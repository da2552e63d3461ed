use std::path::Path;

use carassist_core::Preferences;

use crate::commands::common::{
    apply_overrides, load_settings, open_database, save_settings, validate_import,
};
use crate::error::CliError;

pub fn run_import(input_path: &Path, db_path: &Path) -> Result<(), CliError> {
    let raw = std::fs::read_to_string(input_path)?;
    let imported: Preferences = serde_json::from_str(&raw)?;
    let accepted = validate_import(&imported)?;
    let count = accepted.len();

    let db = open_database(db_path)?;
    let settings = apply_overrides(&load_settings(&db)?, accepted)?;
    save_settings(&db, &settings)?;

    tracing::info!(count, path = %input_path.display(), "Imported preferences");
    println!("Imported {count} preferences from {}", input_path.display());
    Ok(())
}
