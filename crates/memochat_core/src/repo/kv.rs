//! Key-value persistence adapter contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the durable string-key to JSON-value mapping beneath the
//!   record store and shortcut registry.
//! - Support prefix enumeration so one physical table multiplexes several
//!   logical collections.
//!
//! # Invariants
//! - `put` is an upsert; a key is bound to at most one value.
//! - `multi_get`/`multi_remove` operate per key with no transaction; a
//!   failure part-way leaves earlier keys processed (accepted contract,
//!   callers reconcile on next full load).

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Key prefix of the message collection.
pub const MESSAGE_PREFIX: &str = "message:";
/// Key prefix of the shortcut collection.
pub const SHORTCUT_PREFIX: &str = "shortcut:";

pub type KvResult<T> = Result<T, KvError>;

/// Transport error raised by the persistence adapter.
#[derive(Debug)]
pub enum KvError {
    Db(DbError),
}

impl Display for KvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for KvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for KvError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for KvError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable mapping from namespaced string key to serialized record.
pub trait KvStore {
    /// Inserts or replaces one entry.
    fn put(&self, key: &str, value: &str) -> KvResult<()>;

    /// Returns every entry, key-ordered. Also serves export readers that
    /// serialize the whole store.
    fn get_all(&self) -> KvResult<Vec<(String, String)>>;

    /// Returns entries whose key starts with `prefix`, key-ordered.
    fn get_by_prefix(&self, prefix: &str) -> KvResult<Vec<(String, String)>>;

    /// Returns the present entries among `keys`; missing keys are skipped.
    fn multi_get(&self, keys: &[String]) -> KvResult<Vec<(String, String)>>;

    /// Removes the given keys. Missing keys are not an error.
    fn multi_remove(&self, keys: &[String]) -> KvResult<()>;
}

/// SQLite-backed adapter over the `kv_entries` table.
pub struct SqliteKvStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KvStore for SqliteKvStore<'_> {
    fn put(&self, key: &str, value: &str) -> KvResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }

    fn get_all(&self) -> KvResult<Vec<(String, String)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key, value FROM kv_entries ORDER BY key ASC;")?;
        let mut rows = stmt.query([])?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next()? {
            entries.push((row.get(0)?, row.get(1)?));
        }
        Ok(entries)
    }

    fn get_by_prefix(&self, prefix: &str) -> KvResult<Vec<(String, String)>> {
        // Prefixes are fixed collection namespaces, never user input, so a
        // plain LIKE needs no escaping.
        let mut stmt = self.conn.prepare(
            "SELECT key, value FROM kv_entries WHERE key LIKE ?1 || '%' ORDER BY key ASC;",
        )?;
        let mut rows = stmt.query(params![prefix])?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next()? {
            entries.push((row.get(0)?, row.get(1)?));
        }
        Ok(entries)
    }

    fn multi_get(&self, keys: &[String]) -> KvResult<Vec<(String, String)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv_entries WHERE key = ?1;")?;
        let mut entries = Vec::new();
        for key in keys {
            let value: Option<String> = stmt
                .query_row(params![key], |row| row.get(0))
                .optional()?;
            if let Some(value) = value {
                entries.push((key.clone(), value));
            }
        }
        Ok(entries)
    }

    fn multi_remove(&self, keys: &[String]) -> KvResult<()> {
        let mut stmt = self
            .conn
            .prepare("DELETE FROM kv_entries WHERE key = ?1;")?;
        for key in keys {
            stmt.execute(params![key])?;
        }
        Ok(())
    }
}
