use async_trait::async_trait;
use chrono::Utc;
use database::{Filter, Page, PageRequest};
use domain_products::{InMemoryProductRepository, Product, ProductRepository};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{VariationError, VariationResult};
use crate::models::{ProductVariation, VariationField};

/// Repository trait for ProductVariation persistence
///
/// Variations are always addressed through their parent product id. Reads
/// skip soft-deleted variations but do not check the parent; callers resolve
/// it with [`VariationRepository::find_product`] first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VariationRepository: Send + Sync {
    /// The live parent product, with its brand
    async fn find_product(&self, product_id: Uuid) -> VariationResult<Option<Product>>;

    async fn search(
        &self,
        product_id: Uuid,
        filters: Vec<Filter<VariationField>>,
        page: PageRequest,
    ) -> VariationResult<Page<ProductVariation>>;

    async fn find_one(
        &self,
        product_id: Uuid,
        id: Uuid,
        filters: Vec<Filter<VariationField>>,
    ) -> VariationResult<Option<ProductVariation>>;

    async fn find_with_trashed(&self, id: Uuid) -> VariationResult<Option<ProductVariation>>;

    async fn insert(&self, variation: ProductVariation) -> VariationResult<ProductVariation>;

    async fn update(&self, variation: ProductVariation) -> VariationResult<ProductVariation>;

    async fn soft_delete(&self, product_id: Uuid, id: Uuid) -> VariationResult<bool>;
}

/// In-memory implementation of VariationRepository (for development/testing)
#[derive(Default, Clone)]
pub struct InMemoryVariationRepository {
    variations: Arc<RwLock<BTreeMap<Uuid, ProductVariation>>>,
    products: InMemoryProductRepository,
}

impl InMemoryVariationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves parents through an existing product store.
    pub fn with_products(products: InMemoryProductRepository) -> Self {
        Self {
            variations: Arc::default(),
            products,
        }
    }
}

fn belongs(v: &ProductVariation, product_id: Uuid, filters: &[Filter<VariationField>]) -> bool {
    v.shop_product_id == product_id
        && v.deleted_at.is_none()
        && filters
            .iter()
            .all(|filter| filter.matches(filter.field.text(v).as_deref()))
}

#[async_trait]
impl VariationRepository for InMemoryVariationRepository {
    async fn find_product(&self, product_id: Uuid) -> VariationResult<Option<Product>> {
        Ok(self.products.find_one(product_id, Vec::new()).await?)
    }

    async fn search(
        &self,
        product_id: Uuid,
        filters: Vec<Filter<VariationField>>,
        page: PageRequest,
    ) -> VariationResult<Page<ProductVariation>> {
        let variations = self.variations.read().await;
        let matching = variations
            .values()
            .filter(|v| belongs(v, product_id, &filters))
            .cloned()
            .collect();
        Ok(Page::from_vec(matching, page))
    }

    async fn find_one(
        &self,
        product_id: Uuid,
        id: Uuid,
        filters: Vec<Filter<VariationField>>,
    ) -> VariationResult<Option<ProductVariation>> {
        let variations = self.variations.read().await;
        Ok(variations
            .get(&id)
            .filter(|v| belongs(v, product_id, &filters))
            .cloned())
    }

    async fn find_with_trashed(&self, id: Uuid) -> VariationResult<Option<ProductVariation>> {
        Ok(self.variations.read().await.get(&id).cloned())
    }

    async fn insert(&self, variation: ProductVariation) -> VariationResult<ProductVariation> {
        let stored = ProductVariation {
            product: None,
            ..variation
        };
        self.variations
            .write()
            .await
            .insert(stored.id, stored.clone());

        tracing::info!(
            variation_id = %stored.id,
            product_id = %stored.shop_product_id,
            "Created product variation"
        );
        Ok(stored)
    }

    async fn update(&self, variation: ProductVariation) -> VariationResult<ProductVariation> {
        let mut variations = self.variations.write().await;
        match variations.get(&variation.id) {
            Some(existing) if existing.deleted_at.is_none() => {}
            _ => return Err(VariationError::NotFound),
        }
        let stored = ProductVariation {
            product: None,
            ..variation
        };
        variations.insert(stored.id, stored.clone());

        tracing::info!(variation_id = %stored.id, "Updated product variation");
        Ok(stored)
    }

    async fn soft_delete(&self, product_id: Uuid, id: Uuid) -> VariationResult<bool> {
        let mut variations = self.variations.write().await;
        match variations.get_mut(&id) {
            Some(v) if v.shop_product_id == product_id && v.deleted_at.is_none() => {
                let now = Utc::now();
                v.deleted_at = Some(now);
                v.updated_at = now;
                tracing::info!(variation_id = %id, "Soft deleted product variation");
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
