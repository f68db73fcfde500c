//! Database connection management

use std::time::Duration;

use sqlx::{
    PgPool, Postgres, Transaction,
    migrate::{MigrateError, Migrator},
    pool::PoolConnection,
    postgres::PgPoolOptions,
    query,
};
use tokio::time;

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

const PING_SQL: &str = "SELECT 1";

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Check out a single pooled connection.
    ///
    /// # Errors
    ///
    /// Returns an error when no connection can be acquired.
    pub async fn acquire(&self) -> Result<PoolConnection<Postgres>, sqlx::Error> {
        self.pool.acquire().await
    }

    /// Begin a transaction.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction fails.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }

    /// Round-trip a trivial statement to confirm the database is reachable.
    ///
    /// # Errors
    ///
    /// Returns an error when the statement cannot be executed.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        query(PING_SQL).execute(&self.pool).await?;

        Ok(())
    }
}

/// Connect to `PostgreSQL`, giving up once `timeout` elapses.
///
/// Only this first connection is bounded; later acquires keep the pool defaults.
///
/// # Errors
///
/// Returns [`sqlx::Error::PoolTimedOut`] when the deadline passes, or the
/// underlying error if the connection is refused.
pub async fn connect(database_url: &str, timeout: Duration) -> Result<PgPool, sqlx::Error> {
    time::timeout(timeout, PgPoolOptions::new().connect(database_url))
        .await
        .map_err(|_elapsed| sqlx::Error::PoolTimedOut)?
}

/// Apply pending schema migrations.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}
