//! Shared, thread-safe database handle.
//!
//! # Responsibility
//! - Own the single bootstrapped SQLite connection of a process.
//! - Run each unit of work inside one `BEGIN IMMEDIATE` transaction.
//!
//! # Invariants
//! - A unit of work that returns `Err` is rolled back, never committed.
//! - Concurrent callers are serialized by the connection lock; SQLite's
//!   isolation is the only conflict handling.

use super::{open_db, open_db_in_memory, DbError, DbResult};
use parking_lot::Mutex;
use rusqlite::{Connection, TransactionBehavior};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const IN_MEMORY_PATH: &str = ":memory:";

/// Cloneable handle over one migrated SQLite connection.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
    path: PathBuf,
}

impl Database {
    /// Opens (or creates) the database file at `path`.
    ///
    /// The literal path `:memory:` selects a private in-memory database.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        let path = path.as_ref();
        if path == Path::new(IN_MEMORY_PATH) {
            return Self::in_memory();
        }

        let conn = open_db(path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path: path.to_path_buf(),
        })
    }

    /// Opens a fresh in-memory database.
    pub fn in_memory() -> DbResult<Self> {
        let conn = open_db_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path: PathBuf::from(IN_MEMORY_PATH),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs `f` against the connection without opening a transaction.
    pub fn with_conn<T, E>(&self, f: impl FnOnce(&Connection) -> Result<T, E>) -> Result<T, E> {
        let conn = self.conn.lock();
        f(&conn)
    }

    /// Runs `f` inside one immediate transaction.
    ///
    /// Commits when `f` returns `Ok`; drops (rolls back) the transaction
    /// otherwise.
    pub fn with_transaction<T, E>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<DbError>,
    {
        let mut conn = self.conn.lock();
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(DbError::from)?;
        let value = f(&*tx)?;
        tx.commit().map_err(DbError::from)?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Database;
    use crate::db::DbError;
    use std::path::Path;

    fn count_stations(db: &Database) -> i64 {
        db.with_conn(|conn| {
            conn.query_row("SELECT COUNT(*) FROM stations;", [], |row| row.get(0))
                .map_err(DbError::from)
        })
        .unwrap()
    }

    #[test]
    fn memory_path_opens_in_memory_database() {
        let db = Database::open(":memory:").unwrap();
        assert_eq!(db.path(), Path::new(":memory:"));
        assert_eq!(count_stations(&db), 0);
    }

    #[test]
    fn transaction_commits_on_ok() {
        let db = Database::in_memory().unwrap();
        db.with_transaction(|conn| {
            conn.execute("INSERT INTO stations (name) VALUES ('강남역');", [])
                .map_err(DbError::from)
        })
        .unwrap();

        assert_eq!(count_stations(&db), 1);
    }

    #[test]
    fn transaction_rolls_back_on_err() {
        let db = Database::in_memory().unwrap();
        let result: Result<(), DbError> = db.with_transaction(|conn| {
            conn.execute("INSERT INTO stations (name) VALUES ('강남역');", [])?;
            Err(DbError::UnsupportedSchemaVersion {
                db_version: 0,
                latest_supported: 0,
            })
        });

        assert!(result.is_err());
        assert_eq!(count_stations(&db), 0);
    }

    #[test]
    fn clones_share_one_connection() {
        let db = Database::in_memory().unwrap();
        let other = db.clone();
        db.with_transaction(|conn| {
            conn.execute("INSERT INTO stations (name) VALUES ('서초역');", [])
                .map_err(DbError::from)
        })
        .unwrap();

        assert_eq!(count_stations(&other), 1);
    }
}
