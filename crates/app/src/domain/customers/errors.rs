//! Customers service errors.

use sqlx::Error;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CustomersServiceError {
    #[error("customer not found")]
    NotFound,

    #[error("no rows were deleted")]
    NotDeleted,

    #[error("internal error")]
    Internal,
}

impl From<Error> for CustomersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        error!("customer storage error: {error}");

        Self::Internal
    }
}
