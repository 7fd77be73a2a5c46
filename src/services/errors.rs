use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Failures surfaced to the HTTP layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The addressed record, or a record it references, does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The payload failed validation.
    #[error("{0}")]
    Form(String),

    #[error("repository error: {0}")]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound(err.to_string()),
            other => ServiceError::Repository(other),
        }
    }
}
