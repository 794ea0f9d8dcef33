use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod baskets;
pub mod payments;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested record does not exist.
    #[error("record not found")]
    NotFound,
    /// The submission broke a business rule; the message is client-facing.
    #[error("{0}")]
    Form(String),
    /// The persistence layer failed.
    #[error("repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}
