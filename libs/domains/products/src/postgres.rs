use async_trait::async_trait;
use chrono::Utc;
use database::{BaseRepository, Filter, Page, PageRequest, apply_filters};
use domain_brands::{Brand, entity as brand_entity};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{Product, ProductField, UniqueField},
    repository::ProductRepository,
};

#[derive(Clone)]
pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Converts models and attaches their live brands with one extra query.
    async fn with_brands(&self, models: Vec<entity::Model>) -> ProductResult<Vec<Product>> {
        let mut brand_ids: Vec<Uuid> = models.iter().filter_map(|m| m.shop_brand_id).collect();
        brand_ids.sort_unstable();
        brand_ids.dedup();

        let brands: HashMap<Uuid, Brand> = if brand_ids.is_empty() {
            HashMap::new()
        } else {
            brand_entity::Entity::find()
                .filter(brand_entity::Column::Id.is_in(brand_ids))
                .filter(brand_entity::Column::DeletedAt.is_null())
                .all(self.base.db())
                .await?
                .into_iter()
                .map(|model| (model.id, Brand::from(model)))
                .collect()
        };

        Ok(models
            .into_iter()
            .map(|model| {
                let mut product = Product::from(model);
                product.brand = product
                    .shop_brand_id
                    .and_then(|id| brands.get(&id).cloned());
                product
            })
            .collect())
    }

    async fn one_with_brand(&self, model: entity::Model) -> ProductResult<Product> {
        let mut products = self.with_brands(vec![model]).await?;
        products
            .pop()
            .ok_or_else(|| ProductError::Internal("product vanished while loading brand".into()))
    }
}

fn unique_column(field: UniqueField) -> entity::Column {
    match field {
        UniqueField::Slug => entity::Column::Slug,
        UniqueField::Sku => entity::Column::Sku,
        UniqueField::Barcode => entity::Column::Barcode,
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn search(
        &self,
        filters: Vec<Filter<ProductField>>,
        page: PageRequest,
    ) -> ProductResult<Page<Product>> {
        let select = apply_filters(self.base.live(), &filters);
        let page = self.base.fetch_page(select, page).await?;
        let items = self.with_brands(page.items).await?;
        Ok(Page {
            items,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
        })
    }

    async fn find_one(
        &self,
        id: Uuid,
        filters: Vec<Filter<ProductField>>,
    ) -> ProductResult<Option<Product>> {
        let model = apply_filters(self.base.live_by_id(id), &filters)
            .one(self.base.db())
            .await?;
        match model {
            Some(model) => Ok(Some(self.one_with_brand(model).await?)),
            None => Ok(None),
        }
    }

    async fn find_with_trashed(&self, id: Uuid) -> ProductResult<Option<Product>> {
        Ok(self.base.find_with_trashed(id).await?.map(Product::from))
    }

    async fn taken(
        &self,
        field: UniqueField,
        value: &str,
        except: Option<Uuid>,
    ) -> ProductResult<bool> {
        let mut query = entity::Entity::find().filter(unique_column(field).eq(value));
        if let Some(id) = except {
            query = query.filter(entity::Column::Id.ne(id));
        }
        Ok(query.count(self.base.db()).await? > 0)
    }

    async fn brand_is_live(&self, brand_id: Uuid) -> ProductResult<bool> {
        let count = brand_entity::Entity::find()
            .filter(brand_entity::Column::Id.eq(brand_id))
            .filter(brand_entity::Column::DeletedAt.is_null())
            .count(self.base.db())
            .await?;
        Ok(count > 0)
    }

    async fn insert(&self, product: Product) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = product.into();
        let model = active_model.insert(self.base.db()).await?;

        tracing::info!(product_id = %model.id, "Created product");
        self.one_with_brand(model).await
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        if self.base.find_live(product.id).await?.is_none() {
            return Err(ProductError::NotFound);
        }
        let active_model: entity::ActiveModel = product.into();
        let model = active_model.update(self.base.db()).await?;

        tracing::info!(product_id = %model.id, "Updated product");
        self.one_with_brand(model).await
    }

    async fn soft_delete(&self, id: Uuid) -> ProductResult<bool> {
        let now = Utc::now();
        let result = entity::Entity::update_many()
            .set(entity::ActiveModel {
                deleted_at: Set(Some(now.into())),
                updated_at: Set(now.into()),
                ..Default::default()
            })
            .filter(entity::Column::Id.eq(id))
            .filter(entity::Column::DeletedAt.is_null())
            .exec(self.base.db())
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = %id, "Soft deleted product");
        }
        Ok(result.rows_affected > 0)
    }
}
