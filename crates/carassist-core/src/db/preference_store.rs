//! `SQLite` key-value backend for preferences

use std::collections::BTreeMap;

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::Result;
use crate::prefs::{PreferenceKind, PreferenceSink, PreferenceValue, Preferences};
use crate::util::unix_timestamp_millis_now;

/// Durable preference store over the `preferences` table
pub struct SqlitePreferenceStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqlitePreferenceStore<'a> {
    /// Create a new store with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Read every stored preference into memory
    ///
    /// Rows that cannot be decoded are skipped, so readers see their default.
    pub fn snapshot(&self) -> Result<Preferences> {
        let mut stmt = self
            .conn
            .prepare("SELECT key, kind, value FROM preferences ORDER BY key")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut values = Vec::new();
        for row in rows {
            let (key, kind, raw) = row?;
            match decode_row(&kind, &raw) {
                Ok(value) => values.push((key, value)),
                Err(error) => {
                    tracing::warn!(key, %error, "Skipping undecodable preference row");
                }
            }
        }

        Ok(values.into_iter().collect())
    }

    /// Read a single stored value
    pub fn get(&self, key: &str) -> Result<Option<PreferenceValue>> {
        let row = self
            .conn
            .query_row(
                "SELECT kind, value FROM preferences WHERE key = ?1",
                params![key],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;

        row.map(|(kind, raw)| decode_row(&kind, &raw)).transpose()
    }

    /// Stored keys in order
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM preferences ORDER BY key")?;
        let keys = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(keys)
    }

    /// Start a buffered edit; nothing is written until `commit`
    pub fn edit(&self) -> SqlitePreferenceEditor<'a> {
        SqlitePreferenceEditor {
            conn: self.conn,
            pending: BTreeMap::new(),
        }
    }
}

fn decode_row(kind: &str, raw: &str) -> Result<PreferenceValue> {
    PreferenceValue::decode(kind.parse::<PreferenceKind>()?, raw)
}

/// Buffered writer that commits in a single transaction
pub struct SqlitePreferenceEditor<'a> {
    conn: &'a Connection,
    pending: BTreeMap<String, PreferenceValue>,
}

impl PreferenceSink for SqlitePreferenceEditor<'_> {
    fn put(&mut self, key: &str, value: PreferenceValue) {
        self.pending.insert(key.to_string(), value);
    }

    fn commit(&mut self) -> Result<()> {
        // Dropping the transaction on an early return rolls it back
        let tx = self.conn.unchecked_transaction()?;
        let now = unix_timestamp_millis_now();
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO preferences (key, kind, value, updated_at)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(key) DO UPDATE SET
                    kind = excluded.kind,
                    value = excluded.value,
                    updated_at = excluded.updated_at",
            )?;
            for (key, value) in &self.pending {
                stmt.execute(params![key, value.kind().as_str(), value.encode(), now])?;
            }
        }
        tx.commit()?;

        tracing::debug!(count = self.pending.len(), "Committed preferences");
        self.pending.clear();
        Ok(())
    }
}
