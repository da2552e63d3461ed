use std::path::Path;

use crate::commands::common::{
    format_preference_lines, load_settings, open_database, settings_to_preferences,
};
use crate::error::CliError;

pub fn run_show(as_json: bool, db_path: &Path) -> Result<(), CliError> {
    let db = open_database(db_path)?;
    let prefs = settings_to_preferences(&load_settings(&db)?)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&prefs)?);
    } else {
        for line in format_preference_lines(&prefs) {
            println!("{line}");
        }
    }

    Ok(())
}
