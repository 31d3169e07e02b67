//! Service errors as GraphQL errors
//!
//! User-input failures carry `code: BAD_USER_INPUT` plus the offending
//! input. Storage failures are logged and reported generically.

use async_graphql::{Error, ErrorExtensions};

use crate::error::ServiceError;

impl ErrorExtensions for ServiceError {
    fn extend(&self) -> Error {
        match self {
            ServiceError::Duplicate { field, value } => {
                Error::new(self.to_string()).extend_with(|_, e| {
                    e.set("code", "BAD_USER_INPUT");
                    e.set("field", *field);
                    e.set("invalidArgs", value.as_str());
                })
            }
            ServiceError::Validation(err) => Error::new(err.to_string()).extend_with(|_, e| {
                e.set("code", "BAD_USER_INPUT");
                if let Some(field) = err.field() {
                    e.set("field", field);
                }
            }),
            ServiceError::Database(err) => {
                tracing::error!("Database error: {}", err);
                Error::new("internal error")
                    .extend_with(|_, e| e.set("code", "INTERNAL_SERVER_ERROR"))
            }
        }
    }
}
