//! Storefront configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Default product feed, fetched once at session start.
pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/williamqbr/eco-trend-api/refs/heads/main/produtos.json";

/// Configuration for a storefront session.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// URL of the product feed.
    pub catalog_url: String,
    /// Directory for durable session data. `None` keeps state in memory.
    pub data_dir: Option<PathBuf>,
    /// Simulated duration of the order validation call.
    pub validation_delay: Duration,
    /// Simulated duration of the payment call.
    pub payment_delay: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            data_dir: None,
            validation_delay: Duration::from_millis(1000),
            payment_delay: Duration::from_millis(1500),
        }
    }
}

impl StorefrontConfig {
    /// Create a configuration with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the product feed URL.
    pub fn with_catalog_url(mut self, url: impl Into<String>) -> Self {
        self.catalog_url = url.into();
        self
    }

    /// Set the data directory for durable session state.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Set the simulated validation duration.
    pub fn with_validation_delay(mut self, delay: Duration) -> Self {
        self.validation_delay = delay;
        self
    }

    /// Set the simulated payment duration.
    pub fn with_payment_delay(mut self, delay: Duration) -> Self {
        self.payment_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.catalog_url, DEFAULT_CATALOG_URL);
        assert!(config.data_dir.is_none());
        assert_eq!(config.validation_delay, Duration::from_millis(1000));
        assert_eq!(config.payment_delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_config_builder_chain() {
        let config = StorefrontConfig::new()
            .with_catalog_url("https://example.com/produtos.json")
            .with_data_dir("/tmp/eco")
            .with_validation_delay(Duration::from_millis(5))
            .with_payment_delay(Duration::from_millis(7));

        assert_eq!(config.catalog_url, "https://example.com/produtos.json");
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/eco")));
        assert_eq!(config.validation_delay, Duration::from_millis(5));
        assert_eq!(config.payment_delay, Duration::from_millis(7));
    }
}
