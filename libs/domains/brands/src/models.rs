use axum_helpers::double_option;
use chrono::{DateTime, Utc};
use database::{FilterColumn, SearchField, flag_text};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::entity;

/// Brand domain model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Brand {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub website: Option<String>,
    pub description: Option<String>,
    pub position: Option<i32>,
    pub is_visible: bool,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub sort: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Payload for creating a brand
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateBrand {
    #[validate(required, length(max = 255))]
    pub name: Option<String>,
    #[validate(required, length(min = 1, max = 255))]
    pub slug: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    pub description: Option<String>,
    pub position: Option<i32>,
    #[validate(required)]
    pub is_visible: Option<bool>,
    #[validate(length(max = 60))]
    pub seo_title: Option<String>,
    #[validate(length(max = 160))]
    pub seo_description: Option<String>,
    pub sort: Option<i32>,
}

/// Partial update; absent keys leave the column unchanged, `null` clears
/// nullable columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateBrand {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<String>)]
    #[validate(url)]
    pub website: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<i32>)]
    pub position: Option<Option<i32>>,
    pub is_visible: Option<bool>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 60))]
    pub seo_title: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 160))]
    pub seo_description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<i32>)]
    pub sort: Option<Option<i32>>,
}

impl Brand {
    /// Builds a new live brand from a validated payload.
    pub fn new(input: CreateBrand) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name.unwrap_or_default(),
            slug: input.slug.unwrap_or_default(),
            website: input.website,
            description: input.description,
            position: input.position,
            is_visible: input.is_visible.unwrap_or_default(),
            seo_title: input.seo_title,
            seo_description: input.seo_description,
            sort: input.sort,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Applies only the supplied fields.
    pub fn apply(&mut self, input: UpdateBrand) {
        if let Some(name) = input.name {
            self.name = name;
        }
        if let Some(slug) = input.slug {
            self.slug = slug;
        }
        if let Some(website) = input.website {
            self.website = website;
        }
        if let Some(description) = input.description {
            self.description = description;
        }
        if let Some(position) = input.position {
            self.position = position;
        }
        if let Some(is_visible) = input.is_visible {
            self.is_visible = is_visible;
        }
        if let Some(seo_title) = input.seo_title {
            self.seo_title = seo_title;
        }
        if let Some(seo_description) = input.seo_description {
            self.seo_description = seo_description;
        }
        if let Some(sort) = input.sort {
            self.sort = sort;
        }
        self.updated_at = Utc::now();
    }
}

/// Columns a brand listing may filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum BrandField {
    Name,
    Slug,
    Website,
    Description,
    Position,
    IsVisible,
    SeoTitle,
    SeoDescription,
    Sort,
    CreatedAt,
    UpdatedAt,
}

impl SearchField for BrandField {
    fn lookup_allowed(&self) -> bool {
        !matches!(self, BrandField::CreatedAt | BrandField::UpdatedAt)
    }
}

impl FilterColumn<entity::Entity> for BrandField {
    fn column(&self) -> entity::Column {
        match self {
            BrandField::Name => entity::Column::Name,
            BrandField::Slug => entity::Column::Slug,
            BrandField::Website => entity::Column::Website,
            BrandField::Description => entity::Column::Description,
            BrandField::Position => entity::Column::Position,
            BrandField::IsVisible => entity::Column::IsVisible,
            BrandField::SeoTitle => entity::Column::SeoTitle,
            BrandField::SeoDescription => entity::Column::SeoDescription,
            BrandField::Sort => entity::Column::Sort,
            BrandField::CreatedAt => entity::Column::CreatedAt,
            BrandField::UpdatedAt => entity::Column::UpdatedAt,
        }
    }
}

impl BrandField {
    /// Text form of the column, matching what [`database::apply_filters`]
    /// compares against in Postgres.
    pub fn text(&self, brand: &Brand) -> Option<String> {
        match self {
            BrandField::Name => Some(brand.name.clone()),
            BrandField::Slug => Some(brand.slug.clone()),
            BrandField::Website => brand.website.clone(),
            BrandField::Description => brand.description.clone(),
            BrandField::Position => brand.position.map(|v| v.to_string()),
            BrandField::IsVisible => Some(flag_text(brand.is_visible)),
            BrandField::SeoTitle => brand.seo_title.clone(),
            BrandField::SeoDescription => brand.seo_description.clone(),
            BrandField::Sort => brand.sort.map(|v| v.to_string()),
            BrandField::CreatedAt => Some(brand.created_at.to_string()),
            BrandField::UpdatedAt => Some(brand.updated_at.to_string()),
        }
    }
}
