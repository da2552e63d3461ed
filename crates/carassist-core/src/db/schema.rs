//! Database schema

use crate::error::Result;
use rusqlite::Connection;

/// Create the preference table if it does not exist yet
///
/// One row per key. `kind` is the `PreferenceKind` name and `value` the
/// encoded text form, so reads can tell a stored `0` int from a `false` bool.
pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS preferences (
            key TEXT PRIMARY KEY,
            kind TEXT NOT NULL,
            value TEXT NOT NULL,
            updated_at INTEGER NOT NULL
        );",
    )?;
    Ok(())
}
