//! Validation error types

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Numeric field below zero
    #[error("{field} cannot be negative (got {value})")]
    Negative { field: &'static str, value: i32 },

    /// Lookup called without any key to look up by
    #[error("{operation} requires one of: id, name, mail")]
    MissingKey { operation: &'static str },
}

impl ValidationError {
    /// Name of the offending input, reported back to GraphQL clients.
    ///
    /// `None` when no single input is at fault.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Empty { field } | Self::Negative { field, .. } => Some(*field),
            Self::MissingKey { .. } => None,
        }
    }
}
