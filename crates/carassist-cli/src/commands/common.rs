use std::path::Path;

use carassist_core::db::{Database, SettingsRepository, SqliteSettingsRepository};
use carassist_core::models::{keys, AutoLaunchTarget, DayNightMode, Speaker};
use carassist_core::{
    PreferenceKind, PreferenceSink, PreferenceSource, PreferenceValue, Preferences, Settings,
};

use crate::error::CliError;

pub fn open_database(path: &Path) -> Result<Database, CliError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(Database::open(path)?)
}

pub fn load_settings(db: &Database) -> Result<Settings, CliError> {
    Ok(SqliteSettingsRepository::new(db.connection()).load()?)
}

pub fn save_settings(db: &Database, settings: &Settings) -> Result<(), CliError> {
    Ok(SqliteSettingsRepository::new(db.connection()).save(settings)?)
}

/// Flatten a record into its persisted key-value form
pub fn settings_to_preferences(settings: &Settings) -> Result<Preferences, CliError> {
    let mut prefs = Preferences::new();
    settings.store(&mut prefs.edit())?;
    Ok(prefs)
}

/// Apply key-value overrides on top of `settings`
pub fn apply_overrides(
    settings: &Settings,
    overrides: impl IntoIterator<Item = (String, PreferenceValue)>,
) -> Result<Settings, CliError> {
    let mut prefs = settings_to_preferences(settings)?;
    let mut editor = prefs.edit();
    for (key, value) in overrides {
        editor.put(&key, value);
    }
    editor.commit()?;
    Ok(Settings::from_source(&prefs))
}

pub fn layout_kind(key: &str) -> Result<PreferenceKind, CliError> {
    keys::kind_of(key).ok_or_else(|| CliError::UnknownKey(key.to_string()))
}

/// Parse a command-line value for `key` according to its storage kind
pub fn parse_value(key: &str, kind: PreferenceKind, raw: &str) -> Result<PreferenceValue, CliError> {
    let invalid = || CliError::InvalidValue {
        key: key.to_string(),
        expected: kind,
        value: raw.to_string(),
    };

    match kind {
        PreferenceKind::Bool => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(PreferenceValue::Bool(true)),
            "0" | "false" | "no" | "off" => Ok(PreferenceValue::Bool(false)),
            _ => Err(invalid()),
        },
        PreferenceKind::Int => raw
            .trim()
            .parse()
            .map(PreferenceValue::Int)
            .map_err(|_| invalid()),
        PreferenceKind::Text => Ok(PreferenceValue::Text(raw.to_string())),
    }
}

/// Keep known keys with the right kind; unknown keys are dropped with a warning
pub fn validate_import(prefs: &Preferences) -> Result<Vec<(String, PreferenceValue)>, CliError> {
    let mut accepted = Vec::new();
    for (key, value) in prefs.iter() {
        match keys::kind_of(key) {
            None => tracing::warn!(key, "Ignoring unknown preference key"),
            Some(kind) if kind != value.kind() => {
                return Err(CliError::InvalidValue {
                    key: key.to_string(),
                    expected: kind,
                    value: value.to_string(),
                });
            }
            Some(_) => accepted.push((key.to_string(), value.clone())),
        }
    }
    Ok(accepted)
}

/// Human-readable name for enumerated codes
pub fn describe(key: &str, value: &PreferenceValue) -> Option<String> {
    let PreferenceValue::Int(code) = value else {
        return None;
    };
    match key {
        keys::DAY_NIGHT_MODE => Some(DayNightMode::from_code(*code).to_string()),
        keys::SPEAKER_INDEX => Some(Speaker::from_index(*code).to_string()),
        keys::AUTO_LAUNCH_ITEM => Some(AutoLaunchTarget::from_code(*code).to_string()),
        _ => None,
    }
}

/// One line per persisted key, in layout order
pub fn format_preference_lines(prefs: &Preferences) -> Vec<String> {
    keys::ALL
        .iter()
        .filter_map(|(key, _)| {
            let value = prefs.value(key)?;
            Some(match describe(key, value) {
                Some(label) => format!("{key:<20} {value} ({label})"),
                None => format!("{key:<20} {value}"),
            })
        })
        .collect()
}

/// Key, kind and default value, one line per persisted key
pub fn format_key_lines() -> Result<Vec<String>, CliError> {
    let defaults = settings_to_preferences(&Settings::default())?;
    Ok(keys::ALL
        .iter()
        .map(|(key, kind)| match defaults.value(key) {
            Some(value) => format!("{key:<20} {kind:<5} {value}"),
            None => format!("{key:<20} {kind:<5}"),
        })
        .collect())
}
