use std::path::Path;

use crate::commands::common::{load_settings, open_database, settings_to_preferences};
use crate::error::CliError;

pub fn run_export(output_path: Option<&Path>, db_path: &Path) -> Result<(), CliError> {
    let db = open_database(db_path)?;
    let prefs = settings_to_preferences(&load_settings(&db)?)?;
    let rendered = serde_json::to_string_pretty(&prefs)?;

    if let Some(path) = output_path {
        std::fs::write(path, rendered)?;
        println!("{}", path.display());
    } else {
        println!("{rendered}");
    }

    Ok(())
}
