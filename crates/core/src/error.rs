//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures (validation, identity
/// collisions, unresolvable queries). Backing-store concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required identifying attribute was missing at creation time.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Inserting would create two entities with colliding identifying attributes.
    #[error("duplicate identifying attributes: {0}")]
    Duplicate(String),

    /// A query could not be resolved to exactly one entity.
    ///
    /// Covers both "nothing matched" and "more than one candidate matched".
    #[error("not found")]
    NotFound,

    /// An identifier was invalid (e.g. parse failure or the zero value).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            DomainError::validation("path is required").to_string(),
            "validation failed: path is required"
        );
        assert_eq!(
            DomainError::duplicate("file 'hosts'").to_string(),
            "duplicate identifying attributes: file 'hosts'"
        );
        assert_eq!(DomainError::not_found().to_string(), "not found");
    }
}
