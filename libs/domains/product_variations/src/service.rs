use database::{Page, SearchParams, search::lookup_filters};
use domain_products::Product;
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{VariationError, VariationResult};
use crate::models::{
    CreateProductVariation, ProductVariation, UpdateProductVariation, VariationField,
};
use crate::repository::VariationRepository;

/// Service layer for variations nested under a product
///
/// Every operation first resolves the parent; a missing or soft-deleted
/// product fails with [`VariationError::ProductNotFound`]. Returned
/// variations embed the parent.
#[derive(Clone)]
pub struct VariationService<R: VariationRepository> {
    repository: Arc<R>,
}

impl<R: VariationRepository> VariationService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    async fn parent(&self, product_id: Uuid) -> VariationResult<Product> {
        self.repository
            .find_product(product_id)
            .await?
            .ok_or(VariationError::ProductNotFound)
    }

    pub async fn search(
        &self,
        product_id: Uuid,
        params: SearchParams,
    ) -> VariationResult<Page<ProductVariation>> {
        let filters = params.resolve::<VariationField>()?;
        let product = self.parent(product_id).await?;
        let page = self
            .repository
            .search(product_id, filters, params.page)
            .await?;
        Ok(page.map(|v| v.with_product(product.clone())))
    }

    pub async fn create(
        &self,
        product_id: Uuid,
        input: CreateProductVariation,
    ) -> VariationResult<ProductVariation> {
        input.validate()?;
        let product = self.parent(product_id).await?;

        let variation = self
            .repository
            .insert(ProductVariation::new(product_id, input))
            .await?;
        Ok(variation.with_product(product))
    }

    pub async fn find_one(
        &self,
        product_id: Uuid,
        id: Uuid,
        params: &BTreeMap<String, String>,
    ) -> VariationResult<ProductVariation> {
        let product = self.parent(product_id).await?;
        let variation = self
            .repository
            .find_one(product_id, id, lookup_filters::<VariationField>(params))
            .await?
            .ok_or(VariationError::NotFound)?;
        Ok(variation.with_product(product))
    }

    pub async fn update(
        &self,
        product_id: Uuid,
        id: Uuid,
        input: UpdateProductVariation,
    ) -> VariationResult<ProductVariation> {
        input.validate()?;
        let product = self.parent(product_id).await?;

        let mut variation = self
            .repository
            .find_one(product_id, id, Vec::new())
            .await?
            .ok_or(VariationError::NotFound)?;
        variation.apply(input);

        let variation = self.repository.update(variation).await?;
        Ok(variation.with_product(product))
    }

    pub async fn delete(&self, product_id: Uuid, id: Uuid) -> VariationResult<()> {
        self.parent(product_id).await?;
        if self.repository.soft_delete(product_id, id).await? {
            Ok(())
        } else {
            Err(VariationError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryVariationRepository, MockVariationRepository};
    use domain_products::{CreateProduct, InMemoryProductRepository, ProductRepository};

    async fn with_product() -> (VariationService<InMemoryVariationRepository>, Product) {
        let products = InMemoryProductRepository::new();
        let product = products
            .insert(Product::new(CreateProduct {
                name: Some("Shirt".into()),
                qty: Some(3),
                security_stock: Some(0),
                ..Default::default()
            }))
            .await
            .unwrap();
        let service = VariationService::new(InMemoryVariationRepository::with_products(products));
        (service, product)
    }

    fn sized(size: &str) -> CreateProductVariation {
        CreateProductVariation {
            size: Some(size.into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_missing_parent_short_circuits() {
        let mut mock_repo = MockVariationRepository::new();
        mock_repo.expect_find_product().returning(|_| Ok(None));
        mock_repo.expect_insert().never();
        mock_repo.expect_soft_delete().never();

        let service = VariationService::new(mock_repo);
        let product_id = Uuid::now_v7();

        assert!(matches!(
            service.create(product_id, sized("S")).await,
            Err(VariationError::ProductNotFound)
        ));
        assert!(matches!(
            service.delete(product_id, Uuid::now_v7()).await,
            Err(VariationError::ProductNotFound)
        ));
    }

    #[tokio::test]
    async fn test_unknown_filter_fails_before_lookup() {
        let mut mock_repo = MockVariationRepository::new();
        mock_repo.expect_find_product().never();

        let service = VariationService::new(mock_repo);
        let params = SearchParams::from_query(BTreeMap::from([(
            "shop_product_id".to_string(),
            "x".to_string(),
        )]));
        let err = service.search(Uuid::now_v7(), params).await.unwrap_err();

        assert_eq!(err.to_string(), "Unknown filter field: shop_product_id");
    }

    #[tokio::test]
    async fn test_created_variation_embeds_parent() {
        let (service, product) = with_product().await;

        let created = service.create(product.id, sized("M")).await.unwrap();

        assert_eq!(created.shop_product_id, product.id);
        assert_eq!(created.product.map(|p| p.name), Some("Shirt".to_string()));
    }

    #[tokio::test]
    async fn test_update_is_partial() {
        let (service, product) = with_product().await;
        let created = service
            .create(
                product.id,
                CreateProductVariation {
                    color: Some("red".into()),
                    ..sized("M")
                },
            )
            .await
            .unwrap();

        let updated = service
            .update(
                product.id,
                created.id,
                UpdateProductVariation {
                    size: Some(Some("L".into())),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.size.as_deref(), Some("L"));
        assert_eq!(updated.color.as_deref(), Some("red"));
        assert_eq!(updated.weight_unit, created.weight_unit);
    }

    #[tokio::test]
    async fn test_lookup_ignores_price_filter() {
        let (service, product) = with_product().await;
        let created = service.create(product.id, sized("M")).await.unwrap();

        let params = BTreeMap::from([("price".to_string(), "999".to_string())]);
        assert!(service.find_one(product.id, created.id, &params).await.is_ok());

        let params = BTreeMap::from([("size".to_string(), "XL".to_string())]);
        assert!(matches!(
            service.find_one(product.id, created.id, &params).await,
            Err(VariationError::NotFound)
        ));
    }
}
