//! SQLite database connection and migration management.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tracing::debug;

use super::group::SqliteGroupRepository;
use super::transaction::run_in_transaction;
use super::user::SqliteUserRepository;
use crate::db::{Database, DbError, DbResult, WriteOp};

/// How long a connection waits on a locked file-backed database.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite database implementation.
///
/// Provides access to repositories via associated types, avoiding dynamic dispatch.
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open (or create) a database file at the given path.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        debug!(path = %path.as_ref().display(), "Opened file-backed database");
        Ok(Self { pool })
    }

    /// Create a private in-memory database.
    ///
    /// Every SQLite `:memory:` connection is its own database, so the pool
    /// holds exactly one connection that is never recycled.
    pub async fn in_memory() -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// The underlying connection pool.
    ///
    /// Useful for tests and advanced operations that need direct access.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl Database for SqliteDatabase {
    type Users<'a> = SqliteUserRepository<'a>;
    type Groups<'a> = SqliteGroupRepository<'a>;

    async fn migrate(&self) -> DbResult<()> {
        sqlx::migrate!("./data/sql/sqlite")
            .run(&self.pool)
            .await
            .map_err(|e| DbError::Migration {
                message: e.to_string(),
            })
    }

    fn users(&self) -> Self::Users<'_> {
        SqliteUserRepository { pool: &self.pool }
    }

    fn groups(&self) -> Self::Groups<'_> {
        SqliteGroupRepository { pool: &self.pool }
    }

    async fn run_transaction(&self, ops: &[WriteOp]) -> DbResult<()> {
        run_in_transaction(&self.pool, ops).await
    }
}
