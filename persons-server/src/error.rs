//! Error types for persons-server

use thiserror::Error;

use crate::db::DbError;
use crate::models::ValidationError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure of a PersonService operation
///
/// "Not found" is not an error: operations return `Ok(None)` for it.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Pre-check found an existing row with the same unique value
    #[error("{field} must be unique")]
    Duplicate { field: &'static str, value: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Database(#[from] DbError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_display() {
        let err = ServiceError::Duplicate {
            field: "name",
            value: "Alice".into(),
        };
        assert_eq!(err.to_string(), "name must be unique");
    }

    #[test]
    fn database_errors_convert() {
        let err = ServiceError::from(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        assert!(matches!(err, ServiceError::Database(_)));
    }
}
