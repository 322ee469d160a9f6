use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod categories;
pub mod products;
pub mod tags;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures surfaced to the HTTP layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed or referentially invalid input.
    #[error("{0}")]
    Validation(String),
    /// The targeted record does not exist.
    #[error("record not found")]
    NotFound,
    /// A concurrent write got there first; the caller may retry.
    #[error("conflicting record already exists")]
    Conflict,
    /// Any other persistence failure, propagated unchanged.
    #[error("repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Conflict => ServiceError::Conflict,
            RepositoryError::MissingReference { .. } => ServiceError::Validation(err.to_string()),
            other => ServiceError::Repository(other),
        }
    }
}
