//! Remote catalog access.
//!
//! - [`status`] - closed taxonomy of request outcomes and the status-code classifier
//! - [`client`] - reqwest-backed catalog client
//!
//! The [`CatalogApi`] trait is the seam between callers and the network,
//! so commands can be exercised against a mock.

pub mod client;
pub mod status;

pub use client::CatalogClient;
pub use status::{ApiError, TransportError, classify};

use async_trait::async_trait;

use crate::model::{Album, Composition};

/// Read access to the remote catalog.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Look up an album by id.
    async fn album(&self, album_id: &str) -> Result<Album, ApiError>;

    /// Look up a composition by id.
    async fn composition(&self, composition_id: &str) -> Result<Composition, ApiError>;
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn album(&self, album_id: &str) -> Result<Album, ApiError> {
        self.fetch_album(album_id).await
    }

    async fn composition(&self, composition_id: &str) -> Result<Composition, ApiError> {
        self.fetch_composition(composition_id).await
    }
}
