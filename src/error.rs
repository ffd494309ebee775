//! Unified error handling for the musegraph crate
//!
//! Domain errors stay in their modules ([`EntityError`] for construction
//! and membership, [`FetchError`] for outbound HTTP). [`Error`] wraps them
//! for callers that cross module boundaries, such as row loading and the
//! binary's failure report.
//!
//! # Architecture
//!
//! - [`MusegraphErrorTrait`] - Common interface implemented by the unified error
//! - [`ErrorCategory`] - Classification of errors for handling strategies
//! - [`Error`] - Unified error enum wrapping all domain-specific errors
//!
//! # Usage
//!
//! ```rust,ignore
//! use musegraph::error::{Error, MusegraphErrorTrait};
//!
//! fn handle_error(err: Error) {
//!     if err.is_recoverable() {
//!         println!("Retrying: {err}");
//!     } else {
//!         eprintln!("Fatal error: {err}");
//!     }
//! }
//! ```

use std::io;
use thiserror::Error;

pub use crate::entity::error::EntityError;
pub use crate::utils::error::FetchError;

/// Common trait for musegraph error types
pub trait MusegraphErrorTrait: std::error::Error {
    /// Check if this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Get the error category for handling strategies
    fn category(&self) -> ErrorCategory;
}

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Policy mismatches, wrong entity kinds and missing rows
    Validation,
    /// Network-related errors (HTTP, timeout, rate limit)
    Network,
    /// Parsing and decoding errors
    Parsing,
    /// File I/O errors
    Storage,
}

impl ErrorCategory {
    /// Short description for the category
    pub fn description(&self) -> &'static str {
        match self {
            Self::Validation => "validation error",
            Self::Network => "network error",
            Self::Parsing => "parsing error",
            Self::Storage => "storage error",
        }
    }
}

/// Unified error type for the musegraph crate
#[derive(Error, Debug)]
pub enum Error {
    /// Entity construction and membership errors
    #[error("Entity error: {0}")]
    Entity(#[from] EntityError),

    /// Outbound request errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MusegraphErrorTrait for Error {
    fn is_recoverable(&self) -> bool {
        match self {
            Self::Entity(_) => false,
            Self::Fetch(e) => e.is_retryable(),
            Self::Io(e) => matches!(
                e.kind(),
                io::ErrorKind::Interrupted | io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock
            ),
            Self::Json(_) => false,
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Entity(_) => ErrorCategory::Validation,
            Self::Fetch(FetchError::Decode(_)) => ErrorCategory::Parsing,
            Self::Fetch(_) => ErrorCategory::Network,
            Self::Io(_) => ErrorCategory::Storage,
            Self::Json(_) => ErrorCategory::Parsing,
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category() {
        let fetch_err = Error::Fetch(FetchError::Timeout);
        assert_eq!(fetch_err.category(), ErrorCategory::Network);

        let entity_err = Error::Entity(EntityError::validation("Greek", "culture", "Roman", "greek"));
        assert_eq!(entity_err.category(), ErrorCategory::Validation);

        let decode_err = Error::Fetch(FetchError::Decode("missing field".into()));
        assert_eq!(decode_err.category(), ErrorCategory::Parsing);
    }

    #[test]
    fn test_is_recoverable() {
        assert!(Error::Fetch(FetchError::ServerError(503)).is_recoverable());
        assert!(!Error::Fetch(FetchError::ServerError(404)).is_recoverable());

        let contract = Error::Entity(EntityError::TypeContractViolation {
            expected: "Artifact",
            found: "Artist",
        });
        assert!(!contract.is_recoverable());
    }

    #[test]
    fn test_error_conversion() {
        let entity_err = EntityError::RowNotFound { index: 3, len: 2 };
        let unified: Error = entity_err.into();
        assert!(matches!(unified, Error::Entity(_)));
        assert_eq!(unified.to_string(), "Entity error: Row 3 not found (table has 2 rows)");
    }

    #[test]
    fn test_io_recoverability() {
        let missing = Error::Io(io::Error::new(io::ErrorKind::NotFound, "rows.json"));
        assert_eq!(missing.category(), ErrorCategory::Storage);
        assert!(!missing.is_recoverable());

        let interrupted = Error::Io(io::Error::new(io::ErrorKind::Interrupted, "read"));
        assert!(interrupted.is_recoverable());
        assert_eq!(ErrorCategory::Storage.description(), "storage error");
    }
}
