use std::path::Path;

use carassist_core::Settings;

use crate::commands::common::{open_database, save_settings};
use crate::error::CliError;

pub fn run_reset(db_path: &Path) -> Result<(), CliError> {
    let db = open_database(db_path)?;
    save_settings(&db, &Settings::default())?;
    println!("Preferences reset to defaults");
    Ok(())
}
