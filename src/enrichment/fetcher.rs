//! JSON-over-HTTP fetcher shared by all enrichment adapters
//!
//! Features:
//! - Bounded request timeout
//! - Rate limiting with governor
//! - At most one retry on 429/5xx/timeouts, with backoff
//! - Typed JSON decoding of the response body

use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use reqwest::{header::ACCEPT, Client};
use serde::de::DeserializeOwned;
use std::num::NonZeroU32;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::config::EnrichmentConfig;
use crate::utils::error::FetchError;
use crate::utils::retry::{with_retry_if, RetryConfig};

/// Rate-limited JSON client
pub struct JsonFetcher {
    /// HTTP client with configured timeout and compression
    client: Client,

    /// Rate limiter to control request frequency
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,

    /// Retry budget and backoff
    retry: RetryConfig,
}

impl JsonFetcher {
    /// Create a fetcher from enrichment configuration
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn new(config: &EnrichmentConfig) -> Result<Self, FetchError> {
        Self::with_settings(
            config.requests_per_second,
            RetryConfig::with_delays(config.max_retries, config.retry_delay_ms, 10_000),
            config.request_timeout(),
            &config.user_agent,
        )
    }

    /// Create a fetcher with explicit settings
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn with_settings(
        requests_per_second: u32,
        retry: RetryConfig,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .user_agent(user_agent)
            .build()?;

        let rate = NonZeroU32::new(requests_per_second).unwrap_or(NonZeroU32::MIN);
        let rate_limiter = RateLimiter::direct(Quota::per_second(rate));

        Ok(Self {
            client,
            rate_limiter,
            retry,
        })
    }

    /// GET `url` with query parameters and decode the JSON body
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` for unparseable URLs,
    /// `FetchError::ServerError` for non-success statuses,
    /// `FetchError::Timeout` / `FetchError::Http` for transport failures and
    /// `FetchError::Decode` when the body does not match `T`
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
        accept: &str,
    ) -> Result<T, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;

        with_retry_if(
            &self.retry,
            || self.attempt(parsed.clone(), query, accept),
            FetchError::is_retryable,
        )
        .await
    }

    async fn attempt<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
        accept: &str,
    ) -> Result<T, FetchError> {
        self.rate_limiter.until_ready().await;

        debug!(url = %url, "Sending request");
        let response = self
            .client
            .get(url)
            .query(query)
            .header(ACCEPT, accept)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout
                } else {
                    FetchError::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::ServerError(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}
