//! Pixabay image search client.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;
use url::Url;

use super::{describe_failure, endpoint, transport_failure};
use crate::config::Config;
use crate::domain::entities::{DRAW_SIZE, ImageRecord};
use crate::domain::providers::ImageSource;
use crate::error::{DrawError, Upstream};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Vec<ImageRecord>,
}

/// [`ImageSource`] backed by the Pixabay search API.
///
/// Issues `GET {base}/api/?key=..&q=..&image_type=photo&per_page=..&safesearch=true`.
pub struct PixabayClient {
    http: reqwest::Client,
    search_url: Url,
    api_key: String,
    page_size: u32,
}

impl PixabayClient {
    pub fn new(http: reqwest::Client, search_url: Url, api_key: String, page_size: u32) -> Self {
        Self {
            http,
            search_url,
            api_key,
            page_size,
        }
    }

    /// Creates a client from the service configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `PIXABAY_BASE_URL` is not a valid URL.
    pub fn from_config(http: reqwest::Client, config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(
            http,
            endpoint(&config.pixabay_base_url, "api/")?,
            config.pixabay_api_key.clone(),
            config.image_page_size,
        ))
    }
}

#[async_trait]
impl ImageSource for PixabayClient {
    async fn search(&self, keyword: &str) -> Result<Vec<ImageRecord>, DrawError> {
        let per_page = self.page_size.to_string();

        let response = self
            .http
            .get(self.search_url.clone())
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", keyword),
                ("image_type", "photo"),
                ("per_page", per_page.as_str()),
                ("safesearch", "true"),
            ])
            .send()
            .await
            .map_err(|e| DrawError::upstream(Upstream::ImageSearch, transport_failure(e)))?;

        info!(status = %response.status(), "Image search response");

        if !response.status().is_success() {
            let reason = describe_failure("image search", response).await;
            return Err(DrawError::upstream(Upstream::ImageSearch, reason));
        }

        let body: SearchResponse = response.json().await.map_err(|e| {
            DrawError::upstream(
                Upstream::ImageSearch,
                format!("invalid response body: {}", transport_failure(e)),
            )
        })?;

        if body.hits.len() < DRAW_SIZE {
            return Err(DrawError::InsufficientResults {
                found: body.hits.len(),
                required: DRAW_SIZE,
            });
        }

        Ok(body.hits)
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
