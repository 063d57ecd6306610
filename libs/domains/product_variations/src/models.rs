use axum_helpers::double_option;
use chrono::{DateTime, NaiveDate, Utc};
use database::{FilterColumn, SearchField, flag_text};
use domain_products::Product;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::entity;

pub const DEFAULT_WEIGHT_UNIT: &str = "kg";
pub const DEFAULT_LENGTH_UNIT: &str = "cm";
pub const DEFAULT_VOLUME_UNIT: &str = "l";

/// A sellable variant of a product, carrying its own dimensions and prices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductVariation {
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
    pub published_at: Option<NaiveDate>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    /// Parent product
    pub product: Option<Product>,
}

/// Payload for creating a variation; the parent comes from the path
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductVariation {
    #[validate(length(max = 255))]
    pub size: Option<String>,
    #[validate(length(max = 255))]
    pub color: Option<String>,
    #[serde(default)]
    pub requires_shipping: bool,
    #[validate(length(min = 1, max = 255))]
    pub weight_unit: Option<String>,
    #[validate(range(min = 0.0))]
    pub weight_value: Option<f64>,
    #[validate(length(min = 1, max = 255))]
    pub height_unit: Option<String>,
    #[validate(range(min = 0.0))]
    pub height_value: Option<f64>,
    #[validate(length(min = 1, max = 255))]
    pub width_unit: Option<String>,
    #[validate(range(min = 0.0))]
    pub width_value: Option<f64>,
    #[validate(length(min = 1, max = 255))]
    pub depth_unit: Option<String>,
    #[validate(range(min = 0.0))]
    pub depth_value: Option<f64>,
    #[validate(length(min = 1, max = 255))]
    pub volume_unit: Option<String>,
    #[validate(range(min = 0.0))]
    pub volume_value: Option<f64>,
    #[validate(range(min = 0.0))]
    pub old_price: Option<f64>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 0.0))]
    pub cost: Option<f64>,
    pub published_at: Option<NaiveDate>,
    #[validate(length(max = 60))]
    pub seo_title: Option<String>,
    #[validate(length(max = 160))]
    pub seo_description: Option<String>,
}

/// Partial update of a variation. Units cannot be cleared, only replaced.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductVariation {
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 255))]
    pub size: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 255))]
    pub color: Option<Option<String>>,
    pub requires_shipping: Option<bool>,
    #[validate(length(min = 1, max = 255))]
    pub weight_unit: Option<String>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<f64>)]
    #[validate(range(min = 0.0))]
    pub weight_value: Option<Option<f64>>,
    #[validate(length(min = 1, max = 255))]
    pub height_unit: Option<String>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<f64>)]
    #[validate(range(min = 0.0))]
    pub height_value: Option<Option<f64>>,
    #[validate(length(min = 1, max = 255))]
    pub width_unit: Option<String>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<f64>)]
    #[validate(range(min = 0.0))]
    pub width_value: Option<Option<f64>>,
    #[validate(length(min = 1, max = 255))]
    pub depth_unit: Option<String>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<f64>)]
    #[validate(range(min = 0.0))]
    pub depth_value: Option<Option<f64>>,
    #[validate(length(min = 1, max = 255))]
    pub volume_unit: Option<String>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<f64>)]
    #[validate(range(min = 0.0))]
    pub volume_value: Option<Option<f64>>,
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

impl ProductVariation {
    pub fn new(shop_product_id: Uuid, input: CreateProductVariation) -> Self {
        let now = Utc::now();
        let unit = |given: Option<String>, default: &str| given.unwrap_or_else(|| default.to_string());
        Self {
            id: Uuid::now_v7(),
            shop_product_id,
            size: input.size,
            color: input.color,
            requires_shipping: input.requires_shipping,
            weight_unit: unit(input.weight_unit, DEFAULT_WEIGHT_UNIT),
            weight_value: input.weight_value,
            height_unit: unit(input.height_unit, DEFAULT_LENGTH_UNIT),
            height_value: input.height_value,
            width_unit: unit(input.width_unit, DEFAULT_LENGTH_UNIT),
            width_value: input.width_value,
            depth_unit: unit(input.depth_unit, DEFAULT_LENGTH_UNIT),
            depth_value: input.depth_value,
            volume_unit: unit(input.volume_unit, DEFAULT_VOLUME_UNIT),
            volume_value: input.volume_value,
            old_price: input.old_price,
            price: input.price,
            cost: input.cost,
            published_at: input.published_at,
            seo_title: input.seo_title,
            seo_description: input.seo_description,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            product: None,
        }
    }

    pub fn apply(&mut self, input: UpdateProductVariation) {
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
            size,
            color,
            requires_shipping,
            weight_unit,
            weight_value,
            height_unit,
            height_value,
            width_unit,
            width_value,
            depth_unit,
            depth_value,
            volume_unit,
            volume_value,
            old_price,
            price,
            cost,
            published_at,
            seo_title,
            seo_description,
        );
        self.updated_at = Utc::now();
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.product = Some(product);
        self
    }
}

/// Columns a variation listing may filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum VariationField {
    Size,
    Color,
    RequiresShipping,
    WeightUnit,
    WeightValue,
    HeightUnit,
    HeightValue,
    WidthUnit,
    WidthValue,
    DepthUnit,
    DepthValue,
    VolumeUnit,
    VolumeValue,
    OldPrice,
    Price,
    Cost,
    PublishedAt,
    SeoTitle,
    SeoDescription,
    CreatedAt,
    UpdatedAt,
}

impl SearchField for VariationField {
    /// Single-variation lookups narrow on attributes and dimensions only.
    fn lookup_allowed(&self) -> bool {
        !matches!(
            self,
            VariationField::OldPrice
                | VariationField::Price
                | VariationField::Cost
                | VariationField::PublishedAt
                | VariationField::SeoTitle
                | VariationField::SeoDescription
                | VariationField::CreatedAt
                | VariationField::UpdatedAt
        )
    }
}

impl FilterColumn<entity::Entity> for VariationField {
    fn column(&self) -> entity::Column {
        use entity::Column;
        match self {
            VariationField::Size => Column::Size,
            VariationField::Color => Column::Color,
            VariationField::RequiresShipping => Column::RequiresShipping,
            VariationField::WeightUnit => Column::WeightUnit,
            VariationField::WeightValue => Column::WeightValue,
            VariationField::HeightUnit => Column::HeightUnit,
            VariationField::HeightValue => Column::HeightValue,
            VariationField::WidthUnit => Column::WidthUnit,
            VariationField::WidthValue => Column::WidthValue,
            VariationField::DepthUnit => Column::DepthUnit,
            VariationField::DepthValue => Column::DepthValue,
            VariationField::VolumeUnit => Column::VolumeUnit,
            VariationField::VolumeValue => Column::VolumeValue,
            VariationField::OldPrice => Column::OldPrice,
            VariationField::Price => Column::Price,
            VariationField::Cost => Column::Cost,
            VariationField::PublishedAt => Column::PublishedAt,
            VariationField::SeoTitle => Column::SeoTitle,
            VariationField::SeoDescription => Column::SeoDescription,
            VariationField::CreatedAt => Column::CreatedAt,
            VariationField::UpdatedAt => Column::UpdatedAt,
        }
    }
}

impl VariationField {
    pub fn text(&self, v: &ProductVariation) -> Option<String> {
        let num = |value: Option<f64>| value.map(|n| n.to_string());
        match self {
            VariationField::Size => v.size.clone(),
            VariationField::Color => v.color.clone(),
            VariationField::RequiresShipping => Some(flag_text(v.requires_shipping)),
            VariationField::WeightUnit => Some(v.weight_unit.clone()),
            VariationField::WeightValue => num(v.weight_value),
            VariationField::HeightUnit => Some(v.height_unit.clone()),
            VariationField::HeightValue => num(v.height_value),
            VariationField::WidthUnit => Some(v.width_unit.clone()),
            VariationField::WidthValue => num(v.width_value),
            VariationField::DepthUnit => Some(v.depth_unit.clone()),
            VariationField::DepthValue => num(v.depth_value),
            VariationField::VolumeUnit => Some(v.volume_unit.clone()),
            VariationField::VolumeValue => num(v.volume_value),
            VariationField::OldPrice => num(v.old_price),
            VariationField::Price => num(v.price),
            VariationField::Cost => num(v.cost),
            VariationField::PublishedAt => v.published_at.map(|d| d.to_string()),
            VariationField::SeoTitle => v.seo_title.clone(),
            VariationField::SeoDescription => v.seo_description.clone(),
            VariationField::CreatedAt => Some(v.created_at.to_string()),
            VariationField::UpdatedAt => Some(v.updated_at.to_string()),
        }
    }
}
