//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record carries the requested id. The collection is unchanged.
    #[error("Movie not found: {0}")]
    NotFound(String),

    /// Seed data could not be parsed or failed schema validation
    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),

    /// Two seed records share an id
    #[error("Duplicate movie id in seed data: {0}")]
    DuplicateId(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = StoreError::NotFound("abc".to_string());
        assert_eq!(err.to_string(), "Movie not found: abc");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_seed_errors_are_not_not_found() {
        assert!(!StoreError::InvalidSeed("bad".into()).is_not_found());
        assert!(!StoreError::DuplicateId("x".into()).is_not_found());
    }
}
