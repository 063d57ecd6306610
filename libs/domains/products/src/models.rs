use axum_helpers::double_option;
use chrono::{DateTime, NaiveDate, Utc};
use database::{FilterColumn, SearchField, flag_text};
use domain_brands::Brand;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::entity;

/// How a product is fulfilled; stored as the Postgres enum `product_type`
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "product_type")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProductType {
    #[sea_orm(string_value = "deliverable")]
    Deliverable,
    #[sea_orm(string_value = "downloadable")]
    Downloadable,
}

/// Product domain model
///
/// Physical dimensions live on the product's variations; `has_variations`
/// marks products that have them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub shop_brand_id: Option<Uuid>,
    pub name: String,
    pub slug: Option<String>,
    pub sku: Option<String>,
    pub barcode: Option<String>,
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
    #[serde(rename = "type")]
    pub product_type: Option<ProductType>,
    pub published_at: Option<NaiveDate>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    /// Owning brand, `null` when unset or soft-deleted
    pub brand: Option<Brand>,
}

/// Payload for creating a product
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(required, length(max = 255))]
    pub name: Option<String>,
    pub shop_brand_id: Option<Uuid>,
    #[validate(length(min = 1, max = 255))]
    pub slug: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub sku: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub barcode: Option<String>,
    pub description: Option<String>,
    #[validate(required, range(min = 0))]
    pub qty: Option<i32>,
    #[validate(required, range(min = 0))]
    pub security_stock: Option<i32>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub is_visible: bool,
    #[serde(default)]
    pub backorder: bool,
    #[serde(default)]
    pub requires_shipping: bool,
    #[serde(default)]
    pub has_variations: bool,
    #[validate(range(min = 0.0))]
    pub old_price: Option<f64>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 0.0))]
    pub cost: Option<f64>,
    #[serde(rename = "type")]
    pub product_type: Option<ProductType>,
    pub published_at: Option<NaiveDate>,
    #[validate(length(max = 60))]
    pub seo_title: Option<String>,
    #[validate(length(max = 160))]
    pub seo_description: Option<String>,
}

/// Partial update of a product
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<Uuid>)]
    pub shop_brand_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<String>)]
    #[validate(length(min = 1, max = 255))]
    pub slug: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<String>)]
    #[validate(length(min = 1, max = 255))]
    pub sku: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<String>)]
    #[validate(length(min = 1, max = 255))]
    pub barcode: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[validate(range(min = 0))]
    pub qty: Option<i32>,
    #[validate(range(min = 0))]
    pub security_stock: Option<i32>,
    pub featured: Option<bool>,
    pub is_visible: Option<bool>,
    pub backorder: Option<bool>,
    pub requires_shipping: Option<bool>,
    pub has_variations: Option<bool>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<f64>)]
    #[validate(range(min = 0.0))]
    pub old_price: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<f64>)]
    #[validate(range(min = 0.0))]
    pub price: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<f64>)]
    #[validate(range(min = 0.0))]
    pub cost: Option<Option<f64>>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "double_option::deserialize"
    )]
    #[schema(value_type = Option<ProductType>)]
    pub product_type: Option<Option<ProductType>>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<NaiveDate>)]
    pub published_at: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 60))]
    pub seo_title: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 160))]
    pub seo_description: Option<Option<String>>,
}

impl Product {
    pub fn new(input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            shop_brand_id: input.shop_brand_id,
            name: input.name.unwrap_or_default(),
            slug: input.slug,
            sku: input.sku,
            barcode: input.barcode,
            description: input.description,
            qty: input.qty.unwrap_or_default(),
            security_stock: input.security_stock.unwrap_or_default(),
            featured: input.featured,
            is_visible: input.is_visible,
            backorder: input.backorder,
            requires_shipping: input.requires_shipping,
            has_variations: input.has_variations,
            old_price: input.old_price,
            price: input.price,
            cost: input.cost,
            product_type: input.product_type,
            published_at: input.published_at,
            seo_title: input.seo_title,
            seo_description: input.seo_description,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            brand: None,
        }
    }

    pub fn apply(&mut self, input: UpdateProduct) {
        macro_rules! assign {
            ($($field:ident),+ $(,)?) => {
                $(
                    if let Some(value) = input.$field {
                        self.$field = value;
                    }
                )+
            };
        }

        assign!(
            name,
            shop_brand_id,
            slug,
            sku,
            barcode,
            description,
            qty,
            security_stock,
            featured,
            is_visible,
            backorder,
            requires_shipping,
            has_variations,
            old_price,
            price,
            cost,
            product_type,
            published_at,
            seo_title,
            seo_description,
        );
        self.updated_at = Utc::now();
    }

    /// Current value of a unique column.
    pub fn unique_value(&self, field: UniqueField) -> Option<&str> {
        match field {
            UniqueField::Slug => self.slug.as_deref(),
            UniqueField::Sku => self.sku.as_deref(),
            UniqueField::Barcode => self.barcode.as_deref(),
        }
    }
}

/// Nullable columns that must be unique when set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum UniqueField {
    Slug,
    Sku,
    Barcode,
}

impl UniqueField {
    pub const ALL: [UniqueField; 3] = [UniqueField::Slug, UniqueField::Sku, UniqueField::Barcode];
}

/// Columns a product listing may filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ProductField {
    Name,
    ShopBrandId,
    Slug,
    Sku,
    Barcode,
    Description,
    Qty,
    SecurityStock,
    Featured,
    IsVisible,
    Backorder,
    RequiresShipping,
    HasVariations,
    OldPrice,
    Price,
    Cost,
    Type,
    PublishedAt,
    SeoTitle,
    SeoDescription,
    CreatedAt,
    UpdatedAt,
}

impl SearchField for ProductField {
    fn lookup_allowed(&self) -> bool {
        !matches!(
            self,
            ProductField::Backorder
                | ProductField::RequiresShipping
                | ProductField::Type
                | ProductField::CreatedAt
                | ProductField::UpdatedAt
        )
    }
}

impl FilterColumn<entity::Entity> for ProductField {
    fn column(&self) -> entity::Column {
        use entity::Column;
        match self {
            ProductField::Name => Column::Name,
            ProductField::ShopBrandId => Column::ShopBrandId,
            ProductField::Slug => Column::Slug,
            ProductField::Sku => Column::Sku,
            ProductField::Barcode => Column::Barcode,
            ProductField::Description => Column::Description,
            ProductField::Qty => Column::Qty,
            ProductField::SecurityStock => Column::SecurityStock,
            ProductField::Featured => Column::Featured,
            ProductField::IsVisible => Column::IsVisible,
            ProductField::Backorder => Column::Backorder,
            ProductField::RequiresShipping => Column::RequiresShipping,
            ProductField::HasVariations => Column::HasVariations,
            ProductField::OldPrice => Column::OldPrice,
            ProductField::Price => Column::Price,
            ProductField::Cost => Column::Cost,
            ProductField::Type => Column::ProductType,
            ProductField::PublishedAt => Column::PublishedAt,
            ProductField::SeoTitle => Column::SeoTitle,
            ProductField::SeoDescription => Column::SeoDescription,
            ProductField::CreatedAt => Column::CreatedAt,
            ProductField::UpdatedAt => Column::UpdatedAt,
        }
    }
}

impl ProductField {
    pub fn text(&self, product: &Product) -> Option<String> {
        fn show<T: ToString>(value: &T) -> String {
            value.to_string()
        }

        match self {
            ProductField::Name => Some(product.name.clone()),
            ProductField::ShopBrandId => product.shop_brand_id.as_ref().map(show),
            ProductField::Slug => product.slug.clone(),
            ProductField::Sku => product.sku.clone(),
            ProductField::Barcode => product.barcode.clone(),
            ProductField::Description => product.description.clone(),
            ProductField::Qty => Some(show(&product.qty)),
            ProductField::SecurityStock => Some(show(&product.security_stock)),
            ProductField::Featured => Some(flag_text(product.featured)),
            ProductField::IsVisible => Some(flag_text(product.is_visible)),
            ProductField::Backorder => Some(flag_text(product.backorder)),
            ProductField::RequiresShipping => Some(flag_text(product.requires_shipping)),
            ProductField::HasVariations => Some(flag_text(product.has_variations)),
            ProductField::OldPrice => product.old_price.as_ref().map(show),
            ProductField::Price => product.price.as_ref().map(show),
            ProductField::Cost => product.cost.as_ref().map(show),
            ProductField::Type => product.product_type.as_ref().map(show),
            ProductField::PublishedAt => product.published_at.as_ref().map(show),
            ProductField::SeoTitle => product.seo_title.clone(),
            ProductField::SeoDescription => product.seo_description.clone(),
            ProductField::CreatedAt => Some(show(&product.created_at)),
            ProductField::UpdatedAt => Some(show(&product.updated_at)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product() -> Product {
        Product::new(CreateProduct {
            name: Some("Widget".into()),
            qty: Some(5),
            security_stock: Some(1),
            price: Some(12.5),
            sku: Some("W-1".into()),
            ..Default::default()
        })
    }

    #[test]
    fn test_type_field_is_named_type_on_the_wire() {
        let input: CreateProduct = serde_json::from_value(json!({
            "name": "Ebook",
            "qty": 0,
            "security_stock": 0,
            "type": "downloadable"
        }))
        .unwrap();
        assert_eq!(input.product_type, Some(ProductType::Downloadable));

        let value = serde_json::to_value(Product::new(input)).unwrap();
        assert_eq!(value["type"], "downloadable");
        assert_eq!(value["brand"], serde_json::Value::Null);
        assert_eq!(value["has_variations"], false);
    }

    #[test]
    fn test_negative_quantities_and_prices_are_rejected() {
        let input = CreateProduct {
            name: Some("Widget".into()),
            qty: Some(-1),
            security_stock: Some(0),
            price: Some(-0.01),
            ..Default::default()
        };
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("qty"));
        assert!(fields.contains_key("price"));
        assert!(!fields.contains_key("security_stock"));
    }

    #[test]
    fn test_apply_is_partial_and_can_clear() {
        let mut product = product();
        let patch: UpdateProduct =
            serde_json::from_value(json!({ "qty": 9, "sku": null, "type": "deliverable" }))
                .unwrap();
        product.apply(patch);

        assert_eq!(product.qty, 9);
        assert_eq!(product.sku, None);
        assert_eq!(product.product_type, Some(ProductType::Deliverable));
        assert_eq!(product.price, Some(12.5));
        assert_eq!(product.name, "Widget");
    }

    #[test]
    fn test_text_projection() {
        let product = product();
        assert_eq!(ProductField::Price.text(&product).as_deref(), Some("12.5"));
        assert_eq!(ProductField::Featured.text(&product).as_deref(), Some("0"));
        assert_eq!(ProductField::Type.text(&product), None);
        assert_eq!(product.unique_value(UniqueField::Sku), Some("W-1"));
    }

    #[test]
    fn test_lookup_allow_list() {
        assert!(ProductField::HasVariations.lookup_allowed());
        assert!(ProductField::ShopBrandId.lookup_allowed());
        assert!(!ProductField::Type.lookup_allowed());
        assert_eq!("type".parse::<ProductField>().unwrap(), ProductField::Type);
    }
}
