use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const FAKESTORE_API_BASE: &str = "https://fakestoreapi.com";

#[derive(Error, Debug)]
pub enum FakeStoreError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FakeStoreError>;

/// Product exactly as the catalog API sends it
///
/// Extra fields (the API also ships a `rating` object) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreProduct {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub image: String,
}

/// Thin client over the two read-only catalog endpoints
pub struct FakeStoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl FakeStoreClient {
    /// Client for the API at `base_url` (normally `FAKESTORE_API_BASE`)
    pub fn with_base_url(base_url: String) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("Shopfront/0.1.0"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the whole product list
    pub async fn get_products(&self) -> Result<Vec<StoreProduct>> {
        let url = format!("{}/products", self.base_url);
        let body = self.get_text(&url).await?;
        parse_products(&body)
    }

    /// Fetch the list of category identifiers
    pub async fn get_categories(&self) -> Result<Vec<String>> {
        let url = format!("{}/products/categories", self.base_url);
        let body = self.get_text(&url).await?;
        parse_categories(&body)
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FakeStoreError::RequestFailed(format!(
                "Status {}: {}",
                status, body
            )));
        }

        Ok(response.text().await?)
    }
}

/// Decode a `/products` response body
pub fn parse_products(body: &str) -> Result<Vec<StoreProduct>> {
    Ok(serde_json::from_str(body)?)
}

/// Decode a `/products/categories` response body
pub fn parse_categories(body: &str) -> Result<Vec<String>> {
    Ok(serde_json::from_str(body)?)
}
