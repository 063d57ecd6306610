use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};
use uuid::Uuid;

use super::{Media, MediaRepository, entity};
use crate::error::ProductResult;

#[derive(Clone)]
pub struct PgMediaRepository {
    db: DatabaseConnection,
}

impl PgMediaRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MediaRepository for PgMediaRepository {
    async fn find(&self, product_id: Uuid, collection: &str) -> ProductResult<Option<Media>> {
        let model = entity::Entity::find()
            .filter(entity::Column::ProductId.eq(product_id))
            .filter(entity::Column::CollectionName.eq(collection))
            .order_by_desc(entity::Column::CreatedAt)
            .order_by_desc(entity::Column::Id)
            .one(&self.db)
            .await?;
        Ok(model.map(Media::from))
    }

    /// Uploads for the same product queue on a `FOR UPDATE` lock of the
    /// product row, so each one sees the previous upload's row.
    async fn replace(&self, media: Media) -> ProductResult<Vec<Media>> {
        let product_id = media.product_id;
        let collection = media.collection_name.clone();

        let txn = self.db.begin().await?;
        crate::entity::Entity::find_by_id(product_id)
            .lock_exclusive()
            .one(&txn)
            .await?;
        let displaced = entity::Entity::find()
            .filter(entity::Column::ProductId.eq(product_id))
            .filter(entity::Column::CollectionName.eq(collection.as_str()))
            .all(&txn)
            .await?;
        entity::Entity::delete_many()
            .filter(entity::Column::ProductId.eq(product_id))
            .filter(entity::Column::CollectionName.eq(collection.as_str()))
            .exec(&txn)
            .await?;
        let active_model: entity::ActiveModel = media.into();
        let model = active_model.insert(&txn).await?;
        txn.commit().await?;

        tracing::info!(
            media_id = %model.id,
            product_id = %product_id,
            replaced = displaced.len(),
            "Stored product media"
        );
        Ok(displaced.into_iter().map(Media::from).collect())
    }
}
