use async_trait::async_trait;
use reqwest::Client;
use shared::{
    error::FetchError,
    protocol::{ArtworkPage, ArtworksResponse},
};

pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1/artworks";

/// One page of the remote catalog. Implementations make a single
/// attempt; retry policy belongs to the caller, which currently has
/// none.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the page at `page_index` (0-based).
    async fn fetch_page(&self, page_index: u32) -> Result<ArtworkPage, FetchError>;
}

pub struct ArticFetcher {
    http: Client,
    base_url: String,
}

impl ArticFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for ArticFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl PageFetcher for ArticFetcher {
    async fn fetch_page(&self, page_index: u32) -> Result<ArtworkPage, FetchError> {
        // The catalog counts pages from 1, the table from 0.
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("page", page_index + 1)])
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?
            .error_for_status()
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let body: ArtworksResponse = response.json().await.map_err(|err| {
            if err.is_decode() {
                FetchError::Parse(err.to_string())
            } else {
                FetchError::Network(err.to_string())
            }
        })?;

        Ok(body.into())
    }
}

#[cfg(test)]
#[path = "tests/fetcher_tests.rs"]
mod tests;
