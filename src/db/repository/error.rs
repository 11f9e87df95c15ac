//! Error types for repository operations.

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// A schedule with this id is already stored. Ids are matched
    /// case-sensitively and exactly.
    #[error("duplicate schedule id: {id}")]
    DuplicateId { id: String },

    /// No stored schedule has this id.
    #[error("schedule not found: {id}")]
    NotFound { id: String },

    /// Internal/unexpected errors.
    #[error("internal repository error: {message}")]
    Internal { message: String },
}

impl RepositoryError {
    /// Create a duplicate-id error.
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    /// Create a not-found error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_duplicate_id(&self) -> bool {
        matches!(self, Self::DuplicateId { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            RepositoryError::duplicate_id("S1").to_string(),
            "duplicate schedule id: S1"
        );
        assert_eq!(
            RepositoryError::not_found("S9").to_string(),
            "schedule not found: S9"
        );
    }

    #[test]
    fn test_error_predicates() {
        assert!(RepositoryError::not_found("x").is_not_found());
        assert!(RepositoryError::duplicate_id("x").is_duplicate_id());
        assert!(!RepositoryError::internal("boom").is_not_found());
    }
}
