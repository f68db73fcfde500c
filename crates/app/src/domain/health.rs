//! Health service.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;
use tracing::warn;

use crate::database::Db;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HealthServiceError {
    #[error("database unavailable")]
    DatabaseUnavailable,
}

#[derive(Debug, Clone)]
pub struct PgHealthService {
    db: Db,
}

impl PgHealthService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HealthService for PgHealthService {
    async fn check(&self) -> Result<(), HealthServiceError> {
        self.db.ping().await.map_err(|source| {
            warn!("database health check failed: {source}");

            HealthServiceError::DatabaseUnavailable
        })
    }
}

#[automock]
#[async_trait]
pub trait HealthService: Send + Sync {
    /// Confirms the backing database answers queries.
    async fn check(&self) -> Result<(), HealthServiceError>;
}
