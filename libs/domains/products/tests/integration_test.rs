//! Integration tests for the Products domain against real PostgreSQL.

use database::{Filter, PageRequest};
use domain_brands::{BrandService, CreateBrand, PgBrandRepository};
use domain_products::media::{
    ImageService, ImageUpload, MediaRepository, MediaStorage, PRODUCT_IMAGES, PgMediaRepository,
};
use domain_products::*;
use std::collections::BTreeMap;
use std::sync::Arc;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

fn input(builder: &TestDataBuilder, suffix: &str) -> CreateProduct {
    CreateProduct {
        name: Some(builder.name("product", suffix)),
        slug: Some(builder.slug("product", suffix)),
        qty: Some(4),
        security_stock: Some(1),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_product_embeds_live_brand() {
    let db = TestDatabase::new().await;
    let brands = BrandService::new(PgBrandRepository::new(db.connection()));
    let service = ProductService::new(PgProductRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("product_brand");

    let brand = brands
        .create(CreateBrand {
            name: Some(builder.name("brand", "acme")),
            slug: Some(builder.slug("brand", "acme")),
            is_visible: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();

    let created = service
        .create(CreateProduct {
            shop_brand_id: Some(brand.id),
            product_type: Some(ProductType::Downloadable),
            ..input(&builder, "anvil")
        })
        .await
        .unwrap();
    let brand_of = |p: &Product| p.brand.as_ref().map(|b| b.id);
    assert_eq!(brand_of(&created), Some(brand.id));

    brands.delete(brand.id).await.unwrap();
    let found = service.find_one(created.id, &BTreeMap::new()).await.unwrap();
    assert_eq!(found.shop_brand_id, Some(brand.id));
    assert_eq!(brand_of(&found), None);
    assert_eq!(found.product_type, Some(ProductType::Downloadable));

    let result = service
        .update(
            created.id,
            UpdateProduct {
                shop_brand_id: Some(Some(brand.id)),
                ..Default::default()
            },
        )
        .await;
    // Unchanged brand reference is not re-checked.
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_numeric_and_enum_filters() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let service = ProductService::new(repo.clone());
    let builder = TestDataBuilder::from_test_name("product_filters");

    let lamp = service
        .create(CreateProduct {
            price: Some(19.99),
            product_type: Some(ProductType::Deliverable),
            ..input(&builder, "lamp")
        })
        .await
        .unwrap();
    service
        .create(CreateProduct {
            price: Some(5.0),
            product_type: Some(ProductType::Downloadable),
            ..input(&builder, "ebook")
        })
        .await
        .unwrap();

    let page = repo
        .search(
            vec![
                Filter::new(ProductField::Price, "19.9"),
                Filter::new(ProductField::Type, "DELIV"),
            ],
            PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_uuid_eq(page.items[0].id, lamp.id, "filtered product");
}

#[tokio::test]
async fn test_unique_constraint_names_column() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("product_unique");

    let mut first = Product::new(input(&builder, "a"));
    first.barcode = Some("0042".into());
    repo.insert(first).await.unwrap();

    let mut second = Product::new(input(&builder, "b"));
    second.barcode = Some("0042".into());
    let result = repo.insert(second).await;

    assert!(matches!(
        result,
        Err(ProductError::Taken(UniqueField::Barcode))
    ));
}

#[tokio::test]
async fn test_image_slot_holds_one_row() {
    let db = TestDatabase::new().await;
    let repo = Arc::new(PgProductRepository::new(db.connection()));
    let media = PgMediaRepository::new(db.connection());
    let root = std::env::temp_dir().join(format!("products-it-{}", uuid::Uuid::now_v7()));
    let images = ImageService::new(repo.clone(), media.clone(), MediaStorage::new(&root, "/storage"));
    let builder = TestDataBuilder::from_test_name("product_image");

    let product = repo
        .insert(Product::new(input(&builder, "lamp")))
        .await
        .unwrap();

    let upload = |name: &str| ImageUpload {
        file_name: Some(name.to_string()),
        content_type: Some("image/png".into()),
        bytes: name.as_bytes().to_vec(),
    };
    images.upload(product.id, upload("one.png")).await.unwrap();
    let second = images.upload(product.id, upload("two.png")).await.unwrap();

    let stored = assert_some(
        media.find(product.id, PRODUCT_IMAGES).await.unwrap(),
        "product image",
    );
    assert_uuid_eq(stored.id, second.media.id, "current image");
    assert_eq!(stored.size, "two.png".len() as i64);

    let _ = tokio::fs::remove_dir_all(&root).await;
}

#[tokio::test]
async fn test_concurrent_replacements_leave_one_row() {
    use domain_products::media::{Media, entity as media_entity};
    use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let media = PgMediaRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("product_image_race");
    let product = repo
        .insert(Product::new(input(&builder, "desk")))
        .await
        .unwrap();

    let row = |name: &str| Media {
        id: uuid::Uuid::now_v7(),
        product_id: product.id,
        collection_name: PRODUCT_IMAGES.to_string(),
        file_name: name.to_string(),
        mime_type: "image/png".into(),
        size: 1,
        path: format!("{PRODUCT_IMAGES}/{name}"),
        created_at: chrono::Utc::now(),
    };

    let rounds: Vec<_> = (0..8)
        .map(|i| {
            let media = media.clone();
            let entry = row(&format!("{i}.png"));
            tokio::spawn(async move { media.replace(entry).await })
        })
        .collect();
    for round in rounds {
        round.await.unwrap().unwrap();
    }

    let rows = media_entity::Entity::find()
        .filter(media_entity::Column::ProductId.eq(product.id))
        .filter(media_entity::Column::CollectionName.eq(PRODUCT_IMAGES))
        .count(&db.connection())
        .await
        .unwrap();
    assert_eq!(rows, 1);
}
