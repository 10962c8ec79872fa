//! SQLite database connection and migration management.

use std::path::Path;
use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{debug, info};

use super::category::SqliteCategoryRepository;
use super::question::SqliteQuestionRepository;
use crate::db::{Database, DbError, DbResult};

/// Sample question set used by `seed_sample_questions`.
const SAMPLE_QUESTIONS: &str = include_str!("../../../data/sql/seed/questions.sql");

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
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Create an in-memory database (useful for testing).
    ///
    /// Every SQLite connection to `:memory:` gets its own database, so the
    /// pool is pinned to a single connection that is never recycled.
    pub async fn in_memory() -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Access the underlying pool for ad-hoc queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Load the bundled sample questions into an empty `questions` table.
    ///
    /// Returns the number of questions inserted; a table that already holds
    /// questions is left untouched and `0` is returned.
    pub async fn seed_sample_questions(&self) -> DbResult<u64> {
        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        if existing > 0 {
            debug!(existing, "questions table not empty, skipping seed");
            return Ok(0);
        }

        let result = sqlx::raw_sql(SAMPLE_QUESTIONS).execute(&self.pool).await?;
        info!(inserted = result.rows_affected(), "seeded sample questions");
        Ok(result.rows_affected())
    }
}

impl Database for SqliteDatabase {
    type Questions<'a> = SqliteQuestionRepository<'a>;
    type Categories<'a> = SqliteCategoryRepository<'a>;

    async fn migrate(&self) -> DbResult<()> {
        sqlx::migrate!("./data/sql/sqlite")
            .run(&self.pool)
            .await
            .map_err(|e| DbError::Migration {
                message: e.to_string(),
            })
    }

    fn questions(&self) -> Self::Questions<'_> {
        SqliteQuestionRepository { pool: &self.pool }
    }

    fn categories(&self) -> Self::Categories<'_> {
        SqliteCategoryRepository { pool: &self.pool }
    }
}
