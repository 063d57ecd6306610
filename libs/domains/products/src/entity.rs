use database::SoftDelete;
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::models::{Product, ProductType};

/// Sea-ORM entity for the `shop_products` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "shop_products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub shop_brand_id: Option<Uuid>,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: Option<String>,
    #[sea_orm(unique)]
    pub sku: Option<String>,
    #[sea_orm(unique)]
    pub barcode: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub qty: i32,
    pub security_stock: i32,
    pub featured: bool,
    pub is_visible: bool,
    pub backorder: bool,
    pub requires_shipping: bool,
    pub has_variations: bool,
    pub old_price: Option<f64>,
    pub price: Option<f64>,
    pub cost: Option<f64>,
    #[sea_orm(column_name = "type")]
    pub product_type: Option<ProductType>,
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

/// The owning brand is attached separately by the repository.
impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            shop_brand_id: model.shop_brand_id,
            name: model.name,
            slug: model.slug,
            sku: model.sku,
            barcode: model.barcode,
            description: model.description,
            qty: model.qty,
            security_stock: model.security_stock,
            featured: model.featured,
            is_visible: model.is_visible,
            backorder: model.backorder,
            requires_shipping: model.requires_shipping,
            has_variations: model.has_variations,
            old_price: model.old_price,
            price: model.price,
            cost: model.cost,
            product_type: model.product_type,
            published_at: model.published_at,
            seo_title: model.seo_title,
            seo_description: model.seo_description,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
            deleted_at: model.deleted_at.map(Into::into),
            brand: None,
        }
    }
}

impl From<Product> for ActiveModel {
    fn from(product: Product) -> Self {
        ActiveModel {
            id: Set(product.id),
            shop_brand_id: Set(product.shop_brand_id),
            name: Set(product.name),
            slug: Set(product.slug),
            sku: Set(product.sku),
            barcode: Set(product.barcode),
            description: Set(product.description),
            qty: Set(product.qty),
            security_stock: Set(product.security_stock),
            featured: Set(product.featured),
            is_visible: Set(product.is_visible),
            backorder: Set(product.backorder),
            requires_shipping: Set(product.requires_shipping),
            has_variations: Set(product.has_variations),
            old_price: Set(product.old_price),
            price: Set(product.price),
            cost: Set(product.cost),
            product_type: Set(product.product_type),
            published_at: Set(product.published_at),
            seo_title: Set(product.seo_title),
            seo_description: Set(product.seo_description),
            created_at: Set(product.created_at.into()),
            updated_at: Set(product.updated_at.into()),
            deleted_at: Set(product.deleted_at.map(Into::into)),
        }
    }
}
