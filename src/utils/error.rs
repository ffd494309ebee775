//! Error types for outbound HTTP calls
//!
//! Every enrichment adapter funnels its transport and decoding failures
//! through [`FetchError`]. Adapters catch these at their own boundary.

use thiserror::Error;

/// Errors that can occur while talking to an external service
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server error with status code
    #[error("Server error: {0}")]
    ServerError(u16),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,

    /// Response body could not be decoded into the expected shape
    #[error("Decoding error: {0}")]
    Decode(String),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Check whether another attempt could succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout => true,
            Self::ServerError(status) => matches!(status, 429 | 500 | 502 | 503 | 504),
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_statuses() {
        assert!(FetchError::ServerError(503).is_retryable());
        assert!(FetchError::ServerError(429).is_retryable());
        assert!(!FetchError::ServerError(404).is_retryable());
        assert!(FetchError::Timeout.is_retryable());
        assert!(!FetchError::Decode("bad".into()).is_retryable());
    }

    #[test]
    fn test_display() {
        let err = FetchError::ServerError(502);
        assert_eq!(err.to_string(), "Server error: 502");
    }
}
