use async_trait::async_trait;
use chrono::Utc;
use database::{Filter, Page, PageRequest};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{BrandError, BrandResult};
use crate::models::{Brand, BrandField};

/// Repository trait for Brand persistence
///
/// Every read except [`BrandRepository::find_with_trashed`] skips
/// soft-deleted rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrandRepository: Send + Sync {
    /// One page of live brands matching every filter, ordered by id
    async fn search(
        &self,
        filters: Vec<Filter<BrandField>>,
        page: PageRequest,
    ) -> BrandResult<Page<Brand>>;

    /// Live brand by id, narrowed by the given filters
    async fn find_one(&self, id: Uuid, filters: Vec<Filter<BrandField>>)
    -> BrandResult<Option<Brand>>;

    /// Brand by id, including soft-deleted rows
    async fn find_with_trashed(&self, id: Uuid) -> BrandResult<Option<Brand>>;

    /// Whether any brand other than `except` (trashed ones included) uses `slug`
    async fn slug_taken(&self, slug: &str, except: Option<Uuid>) -> BrandResult<bool>;

    async fn insert(&self, brand: Brand) -> BrandResult<Brand>;

    /// Writes every column of an existing live brand
    async fn update(&self, brand: Brand) -> BrandResult<Brand>;

    /// Marks a live brand deleted; `false` when there was none
    async fn soft_delete(&self, id: Uuid) -> BrandResult<bool>;
}

/// In-memory implementation of BrandRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryBrandRepository {
    brands: Arc<RwLock<BTreeMap<Uuid, Brand>>>,
}

impl InMemoryBrandRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches_all(brand: &Brand, filters: &[Filter<BrandField>]) -> bool {
    filters
        .iter()
        .all(|filter| filter.matches(filter.field.text(brand).as_deref()))
}

#[async_trait]
impl BrandRepository for InMemoryBrandRepository {
    async fn search(
        &self,
        filters: Vec<Filter<BrandField>>,
        page: PageRequest,
    ) -> BrandResult<Page<Brand>> {
        let brands = self.brands.read().await;
        // BTreeMap iteration is id order, and v7 ids sort by creation time.
        let matching = brands
            .values()
            .filter(|b| b.deleted_at.is_none() && matches_all(b, &filters))
            .cloned()
            .collect();
        Ok(Page::from_vec(matching, page))
    }

    async fn find_one(
        &self,
        id: Uuid,
        filters: Vec<Filter<BrandField>>,
    ) -> BrandResult<Option<Brand>> {
        let brands = self.brands.read().await;
        Ok(brands
            .get(&id)
            .filter(|b| b.deleted_at.is_none() && matches_all(b, &filters))
            .cloned())
    }

    async fn find_with_trashed(&self, id: Uuid) -> BrandResult<Option<Brand>> {
        let brands = self.brands.read().await;
        Ok(brands.get(&id).cloned())
    }

    async fn slug_taken(&self, slug: &str, except: Option<Uuid>) -> BrandResult<bool> {
        let brands = self.brands.read().await;
        Ok(brands
            .values()
            .any(|b| b.slug == slug && Some(b.id) != except))
    }

    async fn insert(&self, brand: Brand) -> BrandResult<Brand> {
        let mut brands = self.brands.write().await;
        if brands.values().any(|b| b.slug == brand.slug) {
            return Err(BrandError::SlugTaken);
        }
        brands.insert(brand.id, brand.clone());

        tracing::info!(brand_id = %brand.id, "Created brand");
        Ok(brand)
    }

    async fn update(&self, brand: Brand) -> BrandResult<Brand> {
        let mut brands = self.brands.write().await;
        match brands.get(&brand.id) {
            Some(existing) if existing.deleted_at.is_none() => {}
            _ => return Err(BrandError::NotFound),
        }
        if brands
            .values()
            .any(|b| b.slug == brand.slug && b.id != brand.id)
        {
            return Err(BrandError::SlugTaken);
        }
        brands.insert(brand.id, brand.clone());

        tracing::info!(brand_id = %brand.id, "Updated brand");
        Ok(brand)
    }

    async fn soft_delete(&self, id: Uuid) -> BrandResult<bool> {
        let mut brands = self.brands.write().await;
        match brands.get_mut(&id) {
            Some(brand) if brand.deleted_at.is_none() => {
                let now = Utc::now();
                brand.deleted_at = Some(now);
                brand.updated_at = now;
                tracing::info!(brand_id = %id, "Soft deleted brand");
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
