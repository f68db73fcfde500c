//! App Context

use std::{sync::Arc, time::Duration};

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::{
        customers::{CustomersService, PgCustomersService},
        health::{HealthService, PgHealthService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migration(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub customers: Arc<dyn CustomersService>,
    pub health: Arc<dyn HealthService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// Connects within `connect_timeout`, applies pending migrations and
    /// wires the services to the resulting pool.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_database_url(
        url: &str,
        connect_timeout: Duration,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url, connect_timeout)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migration)?;

        info!("database ready");

        Ok(Self::from_db(Db::new(pool)))
    }

    #[must_use]
    pub fn from_db(db: Db) -> Self {
        Self {
            customers: Arc::new(PgCustomersService::new(db.clone())),
            health: Arc::new(PgHealthService::new(db)),
        }
    }
}
