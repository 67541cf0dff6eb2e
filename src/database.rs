//! SQLite store handle.
use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
use sqlx::{ConnectOptions, Connection, SqliteConnection};

const SCHEMA: &str = r#"CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE
)"#;

/// Connection settings for the users store.
///
/// No pool is kept: every operation opens its own connection and closes it
/// once the statement has run.
#[derive(Clone, Debug)]
pub struct Database {
    options: SqliteConnectOptions,
}

impl Database {
    /// Prepare connection options and make sure the `users` table exists.
    pub async fn new(path: &Path, busy_timeout: Duration) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(busy_timeout);
        let db = Self { options };

        let mut conn = db.connect().await?;
        sqlx::query(SCHEMA).execute(&mut conn).await?;
        conn.close().await?;

        tracing::info!(path = %path.display(), "sqlite ready");

        Ok(db)
    }

    /// Open a fresh connection to the store.
    pub async fn connect(&self) -> Result<SqliteConnection, sqlx::Error> {
        self.options.connect().await
    }
}

/// Result of a statement once its connection has been closed.
///
/// A failed close is logged and never replaces the statement outcome: a
/// committed insert still reports its id.
pub fn settle<T>(
    result: Result<T, sqlx::Error>,
    closed: Result<(), sqlx::Error>,
) -> Result<T, sqlx::Error> {
    if let Err(err) = closed {
        tracing::warn!(error = %err, "sqlite connection not closed cleanly");
    }
    result
}
