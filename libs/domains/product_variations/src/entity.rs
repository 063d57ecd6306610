use database::SoftDelete;
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::models::ProductVariation;

/// Sea-ORM entity for the `shop_products_variations` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "shop_products_variations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub shop_product_id: Uuid,
    pub size: Option<String>,
    pub color: Option<String>,
    pub requires_shipping: bool,
    pub weight_unit: String,
    pub weight_value: Option<f64>,
    pub height_unit: String,
    pub height_value: Option<f64>,
    pub width_unit: String,
    pub width_value: Option<f64>,
    pub depth_unit: String,
    pub depth_value: Option<f64>,
    pub volume_unit: String,
    pub volume_value: Option<f64>,
    pub old_price: Option<f64>,
    pub price: Option<f64>,
    pub cost: Option<f64>,
    pub published_at: Option<Date>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
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

impl From<Model> for ProductVariation {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            shop_product_id: model.shop_product_id,
            size: model.size,
            color: model.color,
            requires_shipping: model.requires_shipping,
            weight_unit: model.weight_unit,
            weight_value: model.weight_value,
            height_unit: model.height_unit,
            height_value: model.height_value,
            width_unit: model.width_unit,
            width_value: model.width_value,
            depth_unit: model.depth_unit,
            depth_value: model.depth_value,
            volume_unit: model.volume_unit,
            volume_value: model.volume_value,
            old_price: model.old_price,
            price: model.price,
            cost: model.cost,
            published_at: model.published_at,
            seo_title: model.seo_title,
            seo_description: model.seo_description,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
            deleted_at: model.deleted_at.map(Into::into),
            product: None,
        }
    }
}

impl From<ProductVariation> for ActiveModel {
    fn from(v: ProductVariation) -> Self {
        ActiveModel {
            id: Set(v.id),
            shop_product_id: Set(v.shop_product_id),
            size: Set(v.size),
            color: Set(v.color),
            requires_shipping: Set(v.requires_shipping),
            weight_unit: Set(v.weight_unit),
            weight_value: Set(v.weight_value),
            height_unit: Set(v.height_unit),
            height_value: Set(v.height_value),
            width_unit: Set(v.width_unit),
            width_value: Set(v.width_value),
            depth_unit: Set(v.depth_unit),
            depth_value: Set(v.depth_value),
            volume_unit: Set(v.volume_unit),
            volume_value: Set(v.volume_value),
            old_price: Set(v.old_price),
            price: Set(v.price),
            cost: Set(v.cost),
            published_at: Set(v.published_at),
            seo_title: Set(v.seo_title),
            seo_description: Set(v.seo_description),
            created_at: Set(v.created_at.into()),
            updated_at: Set(v.updated_at.into()),
            deleted_at: Set(v.deleted_at.map(Into::into)),
        }
    }
}
