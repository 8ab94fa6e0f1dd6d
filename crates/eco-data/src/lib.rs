//! HTTP client utilities for the Eco Trend storefront.
//!
//! Provides a small, ergonomic API for making outbound requests with
//! automatic JSON handling, used by the storefront to fetch the product
//! feed.
//!
//! # Example
//!
//! ```rust,ignore
//! use eco_data::FetchClient;
//!
//! let client = FetchClient::new();
//! let products: Vec<Product> = client
//!     .get("https://example.com/produtos.json")
//!     .send()
//!     .await?
//!     .error_for_status()?
//!     .json()?;
//! ```

mod error;
mod response;

pub use error::FetchError;
pub use response::Response;

use std::collections::HashMap;
use std::time::Duration;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for making outbound requests.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client with the default timeout.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be constructed. This
    /// should never happen with the standard TLS configuration.
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: None,
            default_headers: HashMap::new(),
        }
    }

    /// Set a base URL that will be prepended to relative request paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder {
            http: self.http.clone(),
            url: self.full_url(url.into()),
            headers: self.default_headers.clone(),
        }
    }

    fn full_url(&self, url: String) -> String {
        match &self.base_url {
            Some(base) if !url.starts_with("http://") && !url.starts_with("https://") => {
                format!("{}{}", base.trim_end_matches('/'), url)
            }
            _ => url,
        }
    }
}

/// A GET request being built.
#[derive(Debug)]
pub struct RequestBuilder {
    http: reqwest::Client,
    url: String,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Send the request and buffer the response.
    pub async fn send(self) -> Result<Response, FetchError> {
        let mut request = self.http.get(&self.url);
        for (key, value) in &self.headers {
            request = request.header(key, value);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(Response::new(status, body))
    }
}
