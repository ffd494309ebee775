//! Errors raised while building entities or adding them to a collection
//!
//! Only two classes of failure are ever surfaced to callers: a
//! construction-time validation failure (culture or role policy mismatch)
//! and a type contract violation when the wrong kind of entity is handed
//! to a [`Collection`](crate::collection::Collection). Malformed list
//! fields and missing identifiers are recovered locally and never show up
//! here.

use thiserror::Error;

/// Result type alias for entity operations
pub type EntityResult<T> = Result<T, EntityError>;

/// Entity construction and membership errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntityError {
    /// A construction policy rejected the row
    #[error("{policy} validation failed: {field} '{value}' does not contain '{required}'")]
    Validation {
        policy: String,
        field: String,
        value: String,
        required: String,
    },

    /// A value of the wrong entity kind was offered to a collection slot
    #[error("Type contract violation: expected {expected}, found {found}")]
    TypeContractViolation {
        expected: &'static str,
        found: &'static str,
    },

    /// Requested row index does not exist in the source table
    #[error("Row {index} not found (table has {len} rows)")]
    RowNotFound { index: usize, len: usize },
}

impl EntityError {
    /// Create a validation error
    pub fn validation(
        policy: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
        required: impl Into<String>,
    ) -> Self {
        Self::Validation {
            policy: policy.into(),
            field: field.into(),
            value: value.into(),
            required: required.into(),
        }
    }

    /// Check if this is a validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = EntityError::validation("Greek", "culture", "Roman Villa", "greek");
        let msg = err.to_string();
        assert!(msg.contains("Greek"));
        assert!(msg.contains("Roman Villa"));
        assert!(err.is_validation());
    }

    #[test]
    fn test_type_contract_display() {
        let err = EntityError::TypeContractViolation {
            expected: "Artifact",
            found: "Artist",
        };
        assert_eq!(
            err.to_string(),
            "Type contract violation: expected Artifact, found Artist"
        );
        assert!(!err.is_validation());
    }
}
