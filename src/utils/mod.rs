//! Common utilities and helper functions

pub mod error;
pub mod retry;

pub use error::FetchError;
pub use retry::{with_retry_if, RetryConfig};
