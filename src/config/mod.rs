//! Configuration management for musegraph
//!
//! External endpoints are configuration, not constants, so tests and
//! mirrors can point adapters elsewhere. Values come from environment
//! variables, a TOML file, or the defaults below.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Public Wikidata SPARQL endpoint
pub const DEFAULT_WIKIDATA_ENDPOINT: &str = "https://query.wikidata.org/sparql";
/// Art Institute of Chicago artwork search
pub const DEFAULT_CHICAGO_URL: &str = "https://api.artic.edu/api/v1/artworks/search";
/// Cleveland Museum of Art open access artworks
pub const DEFAULT_CLEVELAND_URL: &str = "https://openaccess-api.clevelandart.org/api/artworks/";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Enrichment adapter configuration
    #[serde(default)]
    pub enrichment: EnrichmentConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings shared by all enrichment adapters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// SPARQL endpoint for tag and person lookups
    pub wikidata_endpoint: String,

    /// Art Institute of Chicago search endpoint
    pub chicago_url: String,

    /// Cleveland Museum of Art search endpoint
    pub cleveland_url: String,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// Extra attempts after a transient failure (0 or 1)
    pub max_retries: u32,

    /// Base backoff delay before a retry
    pub retry_delay_ms: u64,

    /// Rate limit (requests per second)
    pub requests_per_second: u32,

    /// User agent string; Wikidata rejects anonymous clients
    pub user_agent: String,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            wikidata_endpoint: DEFAULT_WIKIDATA_ENDPOINT.to_string(),
            chicago_url: DEFAULT_CHICAGO_URL.to_string(),
            cleveland_url: DEFAULT_CLEVELAND_URL.to_string(),
            request_timeout_secs: 30,
            max_retries: 1,
            retry_delay_ms: 500,
            requests_per_second: 5,
            user_agent: format!("musegraph/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl EnrichmentConfig {
    /// Point every adapter at one base URL (mock servers, mirrors)
    ///
    /// Paths mirror the public services: `/sparql`, `/chicago/search`,
    /// `/cleveland/artworks`.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            wikidata_endpoint: format!("{base}/sparql"),
            chicago_url: format!("{base}/chicago/search"),
            cleveland_url: format!("{base}/cleveland/artworks"),
            ..Self::default()
        }
    }

    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = EnrichmentConfig::default();

        let enrichment = EnrichmentConfig {
            wikidata_endpoint: std::env::var("MUSEGRAPH_WIKIDATA_ENDPOINT")
                .unwrap_or(defaults.wikidata_endpoint),
            chicago_url: std::env::var("MUSEGRAPH_CHICAGO_URL").unwrap_or(defaults.chicago_url),
            cleveland_url: std::env::var("MUSEGRAPH_CLEVELAND_URL")
                .unwrap_or(defaults.cleveland_url),
            request_timeout_secs: std::env::var("MUSEGRAPH_REQUEST_TIMEOUT")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(defaults.request_timeout_secs),
            max_retries: std::env::var("MUSEGRAPH_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(defaults.max_retries),
            retry_delay_ms: std::env::var("MUSEGRAPH_RETRY_DELAY_MS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(defaults.retry_delay_ms),
            requests_per_second: std::env::var("MUSEGRAPH_RATE_LIMIT")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(defaults.requests_per_second),
            user_agent: std::env::var("MUSEGRAPH_USER_AGENT").unwrap_or(defaults.user_agent),
        };

        let logging = LoggingConfig {
            level: std::env::var("MUSEGRAPH_LOG_LEVEL").unwrap_or_else(|_| String::from("info")),
            format: std::env::var("MUSEGRAPH_LOG_FORMAT")
                .unwrap_or_else(|_| String::from("text")),
        };

        let config = Self {
            enrichment,
            logging,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let e = &self.enrichment;

        if e.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than 0");
        }

        if e.max_retries > 1 {
            anyhow::bail!("max_retries must be 0 or 1, got {}", e.max_retries);
        }

        if e.requests_per_second == 0 {
            anyhow::bail!("requests_per_second must be greater than 0");
        }

        for (name, value) in [
            ("wikidata_endpoint", &e.wikidata_endpoint),
            ("chicago_url", &e.chicago_url),
            ("cleveland_url", &e.cleveland_url),
        ] {
            url::Url::parse(value).with_context(|| format!("{name} is not a valid URL: {value}"))?;
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            anyhow::bail!("log format must be 'text' or 'json', got '{}'", self.logging.format);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_retry_budget_capped() {
        let mut config = Config::default();
        config.enrichment.max_retries = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.enrichment.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let mut config = Config::default();
        config.enrichment.chicago_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_with_base_url() {
        let config = EnrichmentConfig::with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.wikidata_endpoint, "http://127.0.0.1:8080/sparql");
        assert_eq!(config.chicago_url, "http://127.0.0.1:8080/chicago/search");
        assert_eq!(config.cleveland_url, "http://127.0.0.1:8080/cleveland/artworks");
    }

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config::default();
        assert_eq!(config.enrichment.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [enrichment]
            max_retries = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.enrichment.max_retries, 0);
        assert_eq!(config.enrichment.wikidata_endpoint, DEFAULT_WIKIDATA_ENDPOINT);
        assert_eq!(config.logging.format, "text");
    }
}
