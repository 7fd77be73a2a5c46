//! Error conversion glue between layers.
//!
//! The domain layer must not depend on repository error types, so the
//! conversion from [`TypeConstraintError`] lives here. It covers rows that
//! no longer satisfy the domain invariants when read back from the database.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}
