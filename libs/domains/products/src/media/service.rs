use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use super::{ImageUpload, Media, MediaRepository, MediaStorage, PRODUCT_IMAGES, ProductImage};
use crate::error::{ProductError, ProductResult};
use crate::repository::ProductRepository;

/// Attaches images to live products.
pub struct ImageService<R: ProductRepository, M: MediaRepository> {
    products: Arc<R>,
    media: Arc<M>,
    storage: MediaStorage,
}

impl<R: ProductRepository, M: MediaRepository> Clone for ImageService<R, M> {
    fn clone(&self) -> Self {
        Self {
            products: Arc::clone(&self.products),
            media: Arc::clone(&self.media),
            storage: self.storage.clone(),
        }
    }
}

impl<R: ProductRepository, M: MediaRepository> ImageService<R, M> {
    pub fn new(products: Arc<R>, media: M, storage: MediaStorage) -> Self {
        Self {
            products,
            media: Arc::new(media),
            storage,
        }
    }

    /// Stores the upload as the product's image, replacing the previous one.
    pub async fn upload(&self, product_id: Uuid, upload: ImageUpload) -> ProductResult<ProductImage> {
        let image = upload.checked()?;
        self.live_product(product_id).await?;

        let id = Uuid::now_v7();
        let file_name = format!("{id}.{}", image.extension);
        let path = self
            .storage
            .write(PRODUCT_IMAGES, &file_name, &image.bytes)
            .await?;

        let media = Media {
            id,
            product_id,
            collection_name: PRODUCT_IMAGES.to_string(),
            file_name,
            mime_type: image.mime_type,
            size: image.bytes.len() as i64,
            path,
            created_at: Utc::now(),
        };

        let displaced = match self.media.replace(media.clone()).await {
            Ok(displaced) => displaced,
            Err(e) => {
                if let Err(io) = self.storage.remove(&media.path).await {
                    tracing::warn!(path = %media.path, error = %io, "Failed to remove orphaned upload");
                }
                return Err(e);
            }
        };
        for old in displaced {
            if let Err(e) = self.storage.remove(&old.path).await {
                tracing::warn!(path = %old.path, error = %e, "Failed to remove replaced image");
            }
        }

        tracing::info!(product_id = %product_id, media_id = %media.id, "Uploaded product image");
        Ok(self.present(media))
    }

    /// The product's current image.
    pub async fn current(&self, product_id: Uuid) -> ProductResult<ProductImage> {
        self.live_product(product_id).await?;
        self.media
            .find(product_id, PRODUCT_IMAGES)
            .await?
            .map(|media| self.present(media))
            .ok_or(ProductError::NoImage)
    }

    async fn live_product(&self, product_id: Uuid) -> ProductResult<()> {
        match self.products.find_one(product_id, Vec::new()).await? {
            Some(_) => Ok(()),
            None => Err(ProductError::NotFound),
        }
    }

    fn present(&self, media: Media) -> ProductImage {
        let url = self.storage.url(&media.path);
        ProductImage { media, url }
    }
}
