use std::path::Path;

use carassist_core::PreferenceSource;

use crate::commands::common::{layout_kind, load_settings, open_database, settings_to_preferences};
use crate::error::CliError;

pub fn run_get(key: &str, db_path: &Path) -> Result<(), CliError> {
    layout_kind(key)?;
    let db = open_database(db_path)?;
    let prefs = settings_to_preferences(&load_settings(&db)?)?;

    let value = prefs
        .value(key)
        .ok_or_else(|| CliError::UnknownKey(key.to_string()))?;
    println!("{}", value.encode());
    Ok(())
}
