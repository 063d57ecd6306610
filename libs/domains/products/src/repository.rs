use async_trait::async_trait;
use chrono::Utc;
use database::{Filter, Page, PageRequest};
use domain_brands::{BrandRepository, InMemoryBrandRepository};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductField, UniqueField};

/// Repository trait for Product persistence
///
/// Reads skip soft-deleted products (except
/// [`ProductRepository::find_with_trashed`]) and embed the owning brand when
/// it is still live.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn search(
        &self,
        filters: Vec<Filter<ProductField>>,
        page: PageRequest,
    ) -> ProductResult<Page<Product>>;

    async fn find_one(
        &self,
        id: Uuid,
        filters: Vec<Filter<ProductField>>,
    ) -> ProductResult<Option<Product>>;

    async fn find_with_trashed(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Whether any product other than `except` (trashed ones included) has
    /// `value` in the given unique column
    async fn taken(
        &self,
        field: UniqueField,
        value: &str,
        except: Option<Uuid>,
    ) -> ProductResult<bool>;

    /// Whether `brand_id` names a brand that has not been deleted
    async fn brand_is_live(&self, brand_id: Uuid) -> ProductResult<bool>;

    async fn insert(&self, product: Product) -> ProductResult<Product>;

    async fn update(&self, product: Product) -> ProductResult<Product>;

    /// Marks a live product deleted; `false` when there was none
    async fn soft_delete(&self, id: Uuid) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Brands are resolved through an [`InMemoryBrandRepository`]; share one with
/// the brand service via [`InMemoryProductRepository::with_brands`].
#[derive(Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<Uuid, Product>>>,
    brands: InMemoryBrandRepository,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_brands(brands: InMemoryBrandRepository) -> Self {
        Self {
            products: Arc::default(),
            brands,
        }
    }

    async fn attach_brand(&self, mut product: Product) -> ProductResult<Product> {
        product.brand = match product.shop_brand_id {
            Some(brand_id) => self
                .brands
                .find_one(brand_id, Vec::new())
                .await
                .map_err(|e| ProductError::Internal(e.to_string()))?,
            None => None,
        };
        Ok(product)
    }

    fn conflict(products: &BTreeMap<Uuid, Product>, product: &Product) -> Option<UniqueField> {
        UniqueField::ALL.into_iter().find(|&field| {
            product.unique_value(field).is_some_and(|value| {
                products
                    .values()
                    .any(|p| p.id != product.id && p.unique_value(field) == Some(value))
            })
        })
    }
}

fn matches_all(product: &Product, filters: &[Filter<ProductField>]) -> bool {
    filters
        .iter()
        .all(|filter| filter.matches(filter.field.text(product).as_deref()))
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn search(
        &self,
        filters: Vec<Filter<ProductField>>,
        page: PageRequest,
    ) -> ProductResult<Page<Product>> {
        let matching: Vec<Product> = {
            let products = self.products.read().await;
            products
                .values()
                .filter(|p| p.deleted_at.is_none() && matches_all(p, &filters))
                .cloned()
                .collect()
        };

        let mut page = Page::from_vec(matching, page);
        let mut items = Vec::with_capacity(page.items.len());
        for product in page.items {
            items.push(self.attach_brand(product).await?);
        }
        page.items = items;
        Ok(page)
    }

    async fn find_one(
        &self,
        id: Uuid,
        filters: Vec<Filter<ProductField>>,
    ) -> ProductResult<Option<Product>> {
        let found = {
            let products = self.products.read().await;
            products
                .get(&id)
                .filter(|p| p.deleted_at.is_none() && matches_all(p, &filters))
                .cloned()
        };
        match found {
            Some(product) => Ok(Some(self.attach_brand(product).await?)),
            None => Ok(None),
        }
    }

    async fn find_with_trashed(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn taken(
        &self,
        field: UniqueField,
        value: &str,
        except: Option<Uuid>,
    ) -> ProductResult<bool> {
        let products = self.products.read().await;
        Ok(products
            .values()
            .any(|p| p.unique_value(field) == Some(value) && Some(p.id) != except))
    }

    async fn brand_is_live(&self, brand_id: Uuid) -> ProductResult<bool> {
        let brand = self
            .brands
            .find_one(brand_id, Vec::new())
            .await
            .map_err(|e| ProductError::Internal(e.to_string()))?;
        Ok(brand.is_some())
    }

    async fn insert(&self, product: Product) -> ProductResult<Product> {
        {
            let mut products = self.products.write().await;
            if let Some(field) = Self::conflict(&products, &product) {
                return Err(ProductError::Taken(field));
            }
            products.insert(product.id, Product { brand: None, ..product.clone() });
        }

        tracing::info!(product_id = %product.id, "Created product");
        self.attach_brand(product).await
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        {
            let mut products = self.products.write().await;
            match products.get(&product.id) {
                Some(existing) if existing.deleted_at.is_none() => {}
                _ => return Err(ProductError::NotFound),
            }
            if let Some(field) = Self::conflict(&products, &product) {
                return Err(ProductError::Taken(field));
            }
            products.insert(product.id, Product { brand: None, ..product.clone() });
        }

        tracing::info!(product_id = %product.id, "Updated product");
        self.attach_brand(product).await
    }

    async fn soft_delete(&self, id: Uuid) -> ProductResult<bool> {
        let mut products = self.products.write().await;
        match products.get_mut(&id) {
            Some(product) if product.deleted_at.is_none() => {
                let now = Utc::now();
                product.deleted_at = Some(now);
                product.updated_at = now;
                tracing::info!(product_id = %id, "Soft deleted product");
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
