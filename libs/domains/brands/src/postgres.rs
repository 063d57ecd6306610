use async_trait::async_trait;
use chrono::Utc;
use database::{BaseRepository, Filter, Page, PageRequest, apply_filters};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{BrandError, BrandResult},
    models::{Brand, BrandField},
    repository::BrandRepository,
};

#[derive(Clone)]
pub struct PgBrandRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgBrandRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl BrandRepository for PgBrandRepository {
    async fn search(
        &self,
        filters: Vec<Filter<BrandField>>,
        page: PageRequest,
    ) -> BrandResult<Page<Brand>> {
        let select = apply_filters(self.base.live(), &filters);
        let page = self.base.fetch_page(select, page).await?;
        Ok(page.map(Brand::from))
    }

    async fn find_one(
        &self,
        id: Uuid,
        filters: Vec<Filter<BrandField>>,
    ) -> BrandResult<Option<Brand>> {
        let model = apply_filters(self.base.live_by_id(id), &filters)
            .one(self.base.db())
            .await?;
        Ok(model.map(Brand::from))
    }

    async fn find_with_trashed(&self, id: Uuid) -> BrandResult<Option<Brand>> {
        Ok(self.base.find_with_trashed(id).await?.map(Brand::from))
    }

    async fn slug_taken(&self, slug: &str, except: Option<Uuid>) -> BrandResult<bool> {
        let mut query = entity::Entity::find().filter(entity::Column::Slug.eq(slug));
        if let Some(id) = except {
            query = query.filter(entity::Column::Id.ne(id));
        }
        Ok(query.count(self.base.db()).await? > 0)
    }

    async fn insert(&self, brand: Brand) -> BrandResult<Brand> {
        let active_model: entity::ActiveModel = brand.into();
        let model = active_model.insert(self.base.db()).await?;

        tracing::info!(brand_id = %model.id, "Created brand");
        Ok(model.into())
    }

    async fn update(&self, brand: Brand) -> BrandResult<Brand> {
        if self.base.find_live(brand.id).await?.is_none() {
            return Err(BrandError::NotFound);
        }
        let active_model: entity::ActiveModel = brand.into();
        let model = active_model.update(self.base.db()).await?;

        tracing::info!(brand_id = %model.id, "Updated brand");
        Ok(model.into())
    }

    async fn soft_delete(&self, id: Uuid) -> BrandResult<bool> {
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
            tracing::info!(brand_id = %id, "Soft deleted brand");
        }
        Ok(result.rows_affected > 0)
    }
}
