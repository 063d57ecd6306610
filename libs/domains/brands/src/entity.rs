use database::SoftDelete;
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::models::Brand;

/// Sea-ORM entity for the `shop_brands` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "shop_brands")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub website: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub position: Option<i32>,
    pub is_visible: bool,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub sort: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl SoftDelete for Entity {
    fn id_column() -> Column {
        Column::Id
    }

    fn deleted_at_column() -> Column {
        Column::DeletedAt
    }
}

impl From<Model> for Brand {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            website: model.website,
            description: model.description,
            position: model.position,
            is_visible: model.is_visible,
            seo_title: model.seo_title,
            seo_description: model.seo_description,
            sort: model.sort,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
            deleted_at: model.deleted_at.map(Into::into),
        }
    }
}

// Every column is written, so the same conversion serves insert and update.
impl From<Brand> for ActiveModel {
    fn from(brand: Brand) -> Self {
        ActiveModel {
            id: Set(brand.id),
            name: Set(brand.name),
            slug: Set(brand.slug),
            website: Set(brand.website),
            description: Set(brand.description),
            position: Set(brand.position),
            is_visible: Set(brand.is_visible),
            seo_title: Set(brand.seo_title),
            seo_description: Set(brand.seo_description),
            sort: Set(brand.sort),
            created_at: Set(brand.created_at.into()),
            updated_at: Set(brand.updated_at.into()),
            deleted_at: Set(brand.deleted_at.map(Into::into)),
        }
    }
}
