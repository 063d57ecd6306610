use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use super::Media;

/// Sea-ORM entity for the `media` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "media")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub product_id: Uuid,
    pub collection_name: String,
    pub file_name: String,
    pub mime_type: String,
    pub size: i64,
    pub path: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Media {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            product_id: model.product_id,
            collection_name: model.collection_name,
            file_name: model.file_name,
            mime_type: model.mime_type,
            size: model.size,
            path: model.path,
            created_at: model.created_at.into(),
        }
    }
}

impl From<Media> for ActiveModel {
    fn from(media: Media) -> Self {
        ActiveModel {
            id: Set(media.id),
            product_id: Set(media.product_id),
            collection_name: Set(media.collection_name),
            file_name: Set(media.file_name),
            mime_type: Set(media.mime_type),
            size: Set(media.size),
            path: Set(media.path),
            created_at: Set(media.created_at.into()),
        }
    }
}
