//! Domain-level error types.

use thiserror::Error;

/// Client-supplied data violates a field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must be at most {max} characters (got {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

impl ValidationError {
    /// Name of the offending field, as it appears in request bodies.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Empty { field } | ValidationError::TooLong { field, .. } => *field,
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}
