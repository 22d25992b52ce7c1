use std::time::Duration;

use tracing::debug;

use crate::error::FetchFailure;
use crate::models::Product;

/// Public demo endpoint serving the product listing.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Fixed latency used by the demo variant before requesting the listing.
pub const DEMO_DELAY: Duration = Duration::from_millis(5000);

/// Source of the product listing: "fetch all products, or fail".
#[allow(async_fn_in_trait)]
pub trait Catalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchFailure>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub url: String,
    /// Artificial delay before the request is issued. `None` fetches immediately.
    pub delay: Option<Duration>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CATALOG_URL.to_string(),
            delay: None,
        }
    }
}

impl CatalogConfig {
    /// Demo endpoint behind the fixed [`DEMO_DELAY`], so the loading skeletons
    /// stay visible for a while.
    pub fn demo() -> Self {
        Self {
            delay: Some(DEMO_DELAY),
            ..Self::default()
        }
    }

    /// Delay in whole milliseconds, for timer APIs taking a `u32`. Saturates.
    pub fn delay_millis(&self) -> u32 {
        self.delay
            .map(|d| u32::try_from(d.as_millis()).unwrap_or(u32::MAX))
            .unwrap_or(0)
    }
}

/// Catalog Service reached over HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalog {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Uses a preconfigured client, e.g. one carrying a request timeout.
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Catalog for HttpCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchFailure> {
        debug!(url = %self.url, "requesting product listing");

        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchFailure::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchFailure::Status(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| FetchFailure::Request(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| FetchFailure::Malformed(e.to_string()))
    }
}
