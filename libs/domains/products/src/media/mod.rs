//! Product images.
//!
//! A product has a single image slot: the `product_images` media collection.
//! Uploading replaces whatever the slot held, both the row and the file on
//! disk.

pub mod entity;
pub mod handlers;
pub mod postgres;
pub mod service;
pub mod storage;
pub mod upload;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::ProductResult;

pub use postgres::PgMediaRepository;
pub use service::ImageService;
pub use storage::MediaStorage;
pub use upload::ImageUpload;

/// Collection holding a product's image.
pub const PRODUCT_IMAGES: &str = "product_images";

/// A stored file attached to a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Media {
    pub id: Uuid,
    pub product_id: Uuid,
    pub collection_name: String,
    pub file_name: String,
    pub mime_type: String,
    /// Bytes
    pub size: i64,
    /// Location relative to the media root
    pub path: String,
    pub created_at: DateTime<Utc>,
}

/// Media record as returned by the API, with its public URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductImage {
    #[serde(flatten)]
    pub media: Media,
    pub url: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaRepository: Send + Sync {
    async fn find(&self, product_id: Uuid, collection: &str) -> ProductResult<Option<Media>>;

    /// Makes `media` the only entry of its collection for its product and
    /// returns the entries it displaced.
    async fn replace(&self, media: Media) -> ProductResult<Vec<Media>>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryMediaRepository {
    media: Arc<RwLock<BTreeMap<Uuid, Media>>>,
}

impl InMemoryMediaRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MediaRepository for InMemoryMediaRepository {
    async fn find(&self, product_id: Uuid, collection: &str) -> ProductResult<Option<Media>> {
        let media = self.media.read().await;
        Ok(media
            .values()
            .find(|m| m.product_id == product_id && m.collection_name == collection)
            .cloned())
    }

    async fn replace(&self, media: Media) -> ProductResult<Vec<Media>> {
        let mut all = self.media.write().await;
        let displaced: Vec<Media> = all
            .values()
            .filter(|m| m.product_id == media.product_id && m.collection_name == media.collection_name)
            .cloned()
            .collect();
        for old in &displaced {
            all.remove(&old.id);
        }
        all.insert(media.id, media);
        Ok(displaced)
    }
}
