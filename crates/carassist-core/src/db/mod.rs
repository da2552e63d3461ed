//! Database layer for Car assist

mod connection;
mod preference_store;
mod schema;
mod settings_repository;

pub use connection::Database;
pub use preference_store::{SqlitePreferenceEditor, SqlitePreferenceStore};
pub use settings_repository::{SettingsRepository, SqliteSettingsRepository};
