//! Remote catalog HTTP client
//!
//! Fetches albums and compositions from the catalog service. Every
//! failure is translated once, here, into an [`ApiError`]; callers never
//! see a `reqwest` error.

use serde::de::DeserializeOwned;
use std::time::Duration;

use super::status::ApiError;
use crate::config::CatalogConfig;
use crate::model::{Album, Composition};

/// Remote catalog API client
pub struct CatalogClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client from the catalog section of the config
    pub fn new(config: &CatalogConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let config = CatalogConfig {
            base_url: base_url.into(),
            timeout_secs: 5,
            ..Default::default()
        };
        Self::new(&config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up an album with all of its contents
    ///
    /// Only a 200 or 201 response carries an album. Every other outcome is
    /// returned as `Err`, including a 204, which yields `Err(ApiError::NoContent)`.
    pub async fn fetch_album(&self, album_id: &str) -> Result<Album, ApiError> {
        let url = self.endpoint("albums", album_id)?;
        self.get_json(url).await
    }

    /// Look up a composition with its movements
    ///
    /// Outcomes other than 200 and 201 are returned as `Err`, see [`Self::fetch_album`].
    pub async fn fetch_composition(&self, composition_id: &str) -> Result<Composition, ApiError> {
        let url = self.endpoint("compositions", composition_id)?;
        self.get_json(url).await
    }

    fn endpoint(&self, collection: &str, id: &str) -> Result<reqwest::Url, ApiError> {
        let raw = format!("{}/{}/{}", self.base_url, collection, urlencoding::encode(id));
        reqwest::Url::parse(&raw).map_err(|e| {
            tracing::warn!(url = %raw, error = %e, "Invalid catalog URL");
            ApiError::BadUrl
        })
    }

    /// Send a GET and decode the body. Only 200 and 201 carry a body.
    async fn get_json<T: DeserializeOwned>(&self, url: reqwest::Url) -> Result<T, ApiError> {
        tracing::debug!(%url, "Catalog request");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let outcome = ApiError::from(response.status());
        if !matches!(outcome, ApiError::Ok | ApiError::Created) {
            tracing::debug!(status = response.status().as_u16(), "Catalog request failed: {}", outcome);
            return Err(outcome);
        }

        response.json::<T>().await.map_err(ApiError::from_transport)
    }
}
