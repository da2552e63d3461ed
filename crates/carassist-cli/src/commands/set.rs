use std::path::Path;

use crate::commands::common::{
    apply_overrides, layout_kind, load_settings, open_database, parse_value, save_settings,
};
use crate::error::CliError;

pub fn run_set(key: &str, raw_value: &str, db_path: &Path) -> Result<(), CliError> {
    let kind = layout_kind(key)?;
    let value = parse_value(key, kind, raw_value)?;

    let db = open_database(db_path)?;
    let settings = apply_overrides(&load_settings(&db)?, [(key.to_string(), value.clone())])?;
    save_settings(&db, &settings)?;

    println!("{key} = {value}");
    Ok(())
}
