//! Settings repository implementation

use crate::error::Result;
use crate::models::Settings;
use rusqlite::Connection;

use super::SqlitePreferenceStore;

/// Trait for settings storage operations
pub trait SettingsRepository {
    /// Load settings from the database
    fn load(&self) -> Result<Settings>;

    /// Save settings to the database
    fn save(&self, settings: &Settings) -> Result<()>;
}

/// `SQLite` implementation of `SettingsRepository`
pub struct SqliteSettingsRepository<'a> {
    store: SqlitePreferenceStore<'a>,
}

impl<'a> SqliteSettingsRepository<'a> {
    /// Create a new repository with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self {
            store: SqlitePreferenceStore::new(conn),
        }
    }
}

impl SettingsRepository for SqliteSettingsRepository<'_> {
    fn load(&self) -> Result<Settings> {
        let snapshot = self.store.snapshot()?;
        Ok(Settings::from_source(&snapshot))
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        settings.store(&mut self.store.edit())
    }
}
