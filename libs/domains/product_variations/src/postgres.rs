use async_trait::async_trait;
use chrono::Utc;
use database::{BaseRepository, Filter, Page, PageRequest, apply_filters};
use domain_products::{PgProductRepository, Product, ProductRepository};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::{
    entity,
    error::{VariationError, VariationResult},
    models::{ProductVariation, VariationField},
    repository::VariationRepository,
};

#[derive(Clone)]
pub struct PgVariationRepository {
    base: BaseRepository<entity::Entity>,
    products: PgProductRepository,
}

impl PgVariationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            products: PgProductRepository::new(db.clone()),
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl VariationRepository for PgVariationRepository {
    async fn find_product(&self, product_id: Uuid) -> VariationResult<Option<Product>> {
        Ok(self.products.find_one(product_id, Vec::new()).await?)
    }

    async fn search(
        &self,
        product_id: Uuid,
        filters: Vec<Filter<VariationField>>,
        page: PageRequest,
    ) -> VariationResult<Page<ProductVariation>> {
        let select = self
            .base
            .live()
            .filter(entity::Column::ShopProductId.eq(product_id));
        let select = apply_filters(select, &filters);
        let page = self.base.fetch_page(select, page).await?;
        Ok(page.map(ProductVariation::from))
    }

    async fn find_one(
        &self,
        product_id: Uuid,
        id: Uuid,
        filters: Vec<Filter<VariationField>>,
    ) -> VariationResult<Option<ProductVariation>> {
        let select = self
            .base
            .live_by_id(id)
            .filter(entity::Column::ShopProductId.eq(product_id));
        let model = apply_filters(select, &filters)
            .one(self.base.db())
            .await?;
        Ok(model.map(ProductVariation::from))
    }

    async fn find_with_trashed(&self, id: Uuid) -> VariationResult<Option<ProductVariation>> {
        Ok(self
            .base
            .find_with_trashed(id)
            .await?
            .map(ProductVariation::from))
    }

    async fn insert(&self, variation: ProductVariation) -> VariationResult<ProductVariation> {
        let active_model: entity::ActiveModel = variation.into();
        let model = active_model.insert(self.base.db()).await?;

        tracing::info!(
            variation_id = %model.id,
            product_id = %model.shop_product_id,
            "Created product variation"
        );
        Ok(model.into())
    }

    async fn update(&self, variation: ProductVariation) -> VariationResult<ProductVariation> {
        if self.base.find_live(variation.id).await?.is_none() {
            return Err(VariationError::NotFound);
        }
        let active_model: entity::ActiveModel = variation.into();
        let model = active_model.update(self.base.db()).await?;

        tracing::info!(variation_id = %model.id, "Updated product variation");
        Ok(model.into())
    }

    async fn soft_delete(&self, product_id: Uuid, id: Uuid) -> VariationResult<bool> {
        let now = Utc::now();
        let result = entity::Entity::update_many()
            .set(entity::ActiveModel {
                deleted_at: Set(Some(now.into())),
                updated_at: Set(now.into()),
                ..Default::default()
            })
            .filter(entity::Column::Id.eq(id))
            .filter(entity::Column::ShopProductId.eq(product_id))
            .filter(entity::Column::DeletedAt.is_null())
            .exec(self.base.db())
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(variation_id = %id, "Soft deleted product variation");
        }
        Ok(result.rows_affected > 0)
    }
}
