//! Integration tests for product variations against real PostgreSQL.

use database::{Filter, PageRequest};
use domain_product_variations::*;
use domain_products::{CreateProduct, PgProductRepository, ProductService};
use std::collections::BTreeMap;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

async fn product(db: &TestDatabase, builder: &TestDataBuilder) -> uuid::Uuid {
    ProductService::new(PgProductRepository::new(db.connection()))
        .create(CreateProduct {
            name: Some(builder.name("product", "shirt")),
            slug: Some(builder.slug("product", "shirt")),
            qty: Some(5),
            security_stock: Some(0),
            ..Default::default()
        })
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn test_variation_crud_round_trip() {
    let db = TestDatabase::new().await;
    let repo = PgVariationRepository::new(db.connection());
    let service = VariationService::new(repo.clone());
    let builder = TestDataBuilder::from_test_name("variation_crud");
    let product_id = product(&db, &builder).await;

    let created = service
        .create(
            product_id,
            CreateProductVariation {
                size: Some("XL".into()),
                height_value: Some(72.5),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(created.height_unit, "cm");

    let found = service
        .find_one(product_id, created.id, &BTreeMap::new())
        .await
        .unwrap();
    assert_eq!(found.height_value, Some(72.5));
    assert_uuid_eq(
        found.product.as_ref().map(|p| p.id).unwrap_or_default(),
        product_id,
        "embedded product",
    );

    let page = repo
        .search(
            product_id,
            vec![Filter::new(VariationField::HeightValue, "72.5")],
            PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(page.total, 1);

    service.delete(product_id, created.id).await.unwrap();
    let trashed = assert_some(
        repo.find_with_trashed(created.id).await.unwrap(),
        "trashed variation",
    );
    assert!(trashed.deleted_at.is_some());
}

#[tokio::test]
async fn test_variation_of_other_product_is_not_found() {
    let db = TestDatabase::new().await;
    let service = VariationService::new(PgVariationRepository::new(db.connection()));
    let first = product(&db, &TestDataBuilder::from_test_name("variation_owner_a")).await;
    let second = product(&db, &TestDataBuilder::from_test_name("variation_owner_b")).await;

    let created = service
        .create(first, CreateProductVariation::default())
        .await
        .unwrap();

    assert!(matches!(
        service.find_one(second, created.id, &BTreeMap::new()).await,
        Err(VariationError::NotFound)
    ));
    assert!(matches!(
        service.delete(second, created.id).await,
        Err(VariationError::NotFound)
    ));
}
