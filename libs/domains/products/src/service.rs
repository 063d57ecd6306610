use database::{Page, SearchParams, search::lookup_filters};
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductField, UniqueField, UpdateProduct};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    pub async fn search(&self, params: SearchParams) -> ProductResult<Page<Product>> {
        let filters = params.resolve::<ProductField>()?;
        self.repository.search(filters, params.page).await
    }

    pub async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        input.validate()?;

        let product = Product::new(input);
        self.check_brand(product.shop_brand_id).await?;
        self.check_unique(&product, None).await?;

        self.repository.insert(product).await
    }

    pub async fn find_one(
        &self,
        id: Uuid,
        params: &BTreeMap<String, String>,
    ) -> ProductResult<Product> {
        self.repository
            .find_one(id, lookup_filters::<ProductField>(params))
            .await?
            .ok_or(ProductError::NotFound)
    }

    pub async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product> {
        input.validate()?;

        let mut product = self
            .repository
            .find_one(id, Vec::new())
            .await?
            .ok_or(ProductError::NotFound)?;
        let before = product.clone();

        product.apply(input);
        if product.shop_brand_id != before.shop_brand_id {
            self.check_brand(product.shop_brand_id).await?;
        }
        self.check_unique(&product, Some(&before)).await?;

        self.repository.update(product).await
    }

    pub async fn delete(&self, id: Uuid) -> ProductResult<()> {
        if self.repository.soft_delete(id).await? {
            Ok(())
        } else {
            Err(ProductError::NotFound)
        }
    }

    async fn check_brand(&self, brand_id: Option<Uuid>) -> ProductResult<()> {
        match brand_id {
            Some(id) if !self.repository.brand_is_live(id).await? => {
                Err(ProductError::InvalidBrand)
            }
            _ => Ok(()),
        }
    }

    /// Checks the unique columns that are set and differ from `before`.
    async fn check_unique(&self, product: &Product, before: Option<&Product>) -> ProductResult<()> {
        for field in UniqueField::ALL {
            let Some(value) = product.unique_value(field) else {
                continue;
            };
            if before.is_some_and(|b| b.unique_value(field) == Some(value)) {
                continue;
            }
            if self
                .repository
                .taken(field, value, before.map(|b| b.id))
                .await?
            {
                return Err(ProductError::Taken(field));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryProductRepository, MockProductRepository};
    use domain_brands::{Brand, BrandRepository, CreateBrand, InMemoryBrandRepository};

    fn create_input(name: &str) -> CreateProduct {
        CreateProduct {
            name: Some(name.into()),
            qty: Some(10),
            security_stock: Some(2),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_brand_before_insert() {
        let brand_id = uuid::Uuid::now_v7();
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_brand_is_live()
            .withf(move |id| *id == brand_id)
            .returning(|_| Ok(false));
        mock_repo.expect_insert().never();

        let service = ProductService::new(mock_repo);
        let result = service
            .create(CreateProduct {
                shop_brand_id: Some(brand_id),
                ..create_input("Anvil")
            })
            .await;

        assert!(matches!(result, Err(ProductError::InvalidBrand)));
    }

    #[tokio::test]
    async fn test_create_checks_each_set_unique_column() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_taken()
            .withf(|field, value, _| *field == UniqueField::Slug && value.to_string() == "anvil")
            .returning(|_, _, _| Ok(false));
        mock_repo
            .expect_taken()
            .withf(|field, value, _| *field == UniqueField::Barcode && value.to_string() == "0042")
            .returning(|_, _, _| Ok(true));
        mock_repo.expect_insert().never();

        let service = ProductService::new(mock_repo);
        let result = service
            .create(CreateProduct {
                slug: Some("anvil".into()),
                barcode: Some("0042".into()),
                ..create_input("Anvil")
            })
            .await;

        assert!(matches!(
            result,
            Err(ProductError::Taken(UniqueField::Barcode))
        ));
    }

    #[tokio::test]
    async fn test_create_requires_stock_fields() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_insert().never();

        let service = ProductService::new(mock_repo);
        let result = service
            .create(CreateProduct {
                name: Some("Anvil".into()),
                ..Default::default()
            })
            .await;

        match result {
            Err(ProductError::Validation(errors)) => {
                let fields = errors.field_errors();
                assert!(fields.contains_key("qty"));
                assert!(fields.contains_key("security_stock"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_keeps_own_unique_values() {
        let service = ProductService::new(InMemoryProductRepository::new());
        let created = service
            .create(CreateProduct {
                sku: Some("A-1".into()),
                ..create_input("Anvil")
            })
            .await
            .unwrap();

        let updated = service
            .update(
                created.id,
                UpdateProduct {
                    sku: Some(Some("A-1".into())),
                    qty: Some(3),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.qty, 3);
        assert_eq!(updated.sku.as_deref(), Some("A-1"));
        assert_eq!(updated.security_stock, created.security_stock);
    }

    #[tokio::test]
    async fn test_update_can_detach_brand() {
        let brands = InMemoryBrandRepository::new();
        let brand = brands
            .insert(Brand::new(CreateBrand {
                name: Some("Acme".into()),
                slug: Some("acme".into()),
                is_visible: Some(true),
                ..Default::default()
            }))
            .await
            .unwrap();
        let service = ProductService::new(InMemoryProductRepository::with_brands(brands));

        let created = service
            .create(CreateProduct {
                shop_brand_id: Some(brand.id),
                ..create_input("Anvil")
            })
            .await
            .unwrap();
        assert_eq!(created.brand.map(|b| b.name), Some("Acme".to_string()));

        let updated = service
            .update(
                created.id,
                UpdateProduct {
                    shop_brand_id: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.shop_brand_id, None);
        assert!(updated.brand.is_none());
    }

    #[tokio::test]
    async fn test_lookup_ignores_type_filter() {
        let service = ProductService::new(InMemoryProductRepository::new());
        let created = service.create(create_input("Anvil")).await.unwrap();

        let params = BTreeMap::from([("type".to_string(), "nothing-matches".to_string())]);
        let found = service.find_one(created.id, &params).await.unwrap();
        assert_eq!(found.id, created.id);

        let params = BTreeMap::from([("name".to_string(), "nothing-matches".to_string())]);
        assert!(matches!(
            service.find_one(created.id, &params).await,
            Err(ProductError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let service = ProductService::new(InMemoryProductRepository::new());
        let created = service.create(create_input("Anvil")).await.unwrap();

        service.delete(created.id).await.unwrap();
        assert!(matches!(
            service.delete(created.id).await,
            Err(ProductError::NotFound)
        ));
    }
}
