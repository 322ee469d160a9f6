//! Error taxonomy shared by all repository implementations.

use diesel::result::DatabaseErrorKind;
use thiserror::Error;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failures surfaced by the persistence layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The targeted record does not exist.
    #[error("record not found")]
    NotFound,
    /// A uniqueness constraint rejected the write.
    #[error("conflicting record already exists")]
    Conflict,
    /// A supplied identifier does not reference an existing record.
    #[error("unknown {entity} id {id}")]
    MissingReference {
        /// Entity kind the dangling id was supposed to reference.
        entity: &'static str,
        /// The offending identifier.
        id: i32,
    },
    /// The connection pool could not hand out a connection.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// Any other database failure, propagated unchanged.
    #[error("database error: {0}")]
    Database(diesel::result::Error),
}

impl RepositoryError {
    /// Shorthand for a dangling-reference failure.
    pub fn missing_reference(entity: &'static str, id: i32) -> Self {
        Self::MissingReference { entity, id }
    }
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => RepositoryError::NotFound,
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                RepositoryError::Conflict
            }
            other => RepositoryError::Database(other),
        }
    }
}
