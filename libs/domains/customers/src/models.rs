use axum_helpers::double_option;
use chrono::{DateTime, NaiveDate, Utc};
use database::{FilterColumn, SearchField};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::entity;

/// Stored as the Postgres enum `gender`
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
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "gender")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
    #[sea_orm(string_value = "male")]
    Male,
    #[sea_orm(string_value = "female")]
    Female,
}

/// Customer domain model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub photo: Option<String>,
    pub gender: Gender,
    pub phone: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Payload for creating a customer
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCustomer {
    #[validate(required, length(max = 255))]
    pub name: Option<String>,
    #[validate(required, email)]
    pub email: Option<String>,
    pub photo: Option<String>,
    #[validate(required)]
    pub gender: Option<Gender>,
    pub phone: Option<String>,
    pub birthday: Option<NaiveDate>,
}

/// Partial update of a customer
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCustomer {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<String>)]
    pub photo: Option<Option<String>>,
    pub gender: Option<Gender>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<String>)]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    #[schema(value_type = Option<NaiveDate>)]
    pub birthday: Option<Option<NaiveDate>>,
}

impl Customer {
    pub fn new(input: CreateCustomer) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name.unwrap_or_default(),
            email: input.email.unwrap_or_default(),
            photo: input.photo,
            gender: input.gender.unwrap_or(Gender::Male),
            phone: input.phone,
            birthday: input.birthday,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn apply(&mut self, input: UpdateCustomer) {
        if let Some(name) = input.name {
            self.name = name;
        }
        if let Some(email) = input.email {
            self.email = email;
        }
        if let Some(photo) = input.photo {
            self.photo = photo;
        }
        if let Some(gender) = input.gender {
            self.gender = gender;
        }
        if let Some(phone) = input.phone {
            self.phone = phone;
        }
        if let Some(birthday) = input.birthday {
            self.birthday = birthday;
        }
        self.updated_at = Utc::now();
    }
}

/// Columns a customer listing may filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum CustomerField {
    Name,
    Email,
    Photo,
    Gender,
    Phone,
    Birthday,
    CreatedAt,
    UpdatedAt,
}

impl SearchField for CustomerField {
    fn lookup_allowed(&self) -> bool {
        !matches!(self, CustomerField::CreatedAt | CustomerField::UpdatedAt)
    }
}

impl FilterColumn<entity::Entity> for CustomerField {
    fn column(&self) -> entity::Column {
        match self {
            CustomerField::Name => entity::Column::Name,
            CustomerField::Email => entity::Column::Email,
            CustomerField::Photo => entity::Column::Photo,
            CustomerField::Gender => entity::Column::Gender,
            CustomerField::Phone => entity::Column::Phone,
            CustomerField::Birthday => entity::Column::Birthday,
            CustomerField::CreatedAt => entity::Column::CreatedAt,
            CustomerField::UpdatedAt => entity::Column::UpdatedAt,
        }
    }
}

impl CustomerField {
    pub fn text(&self, customer: &Customer) -> Option<String> {
        match self {
            CustomerField::Name => Some(customer.name.clone()),
            CustomerField::Email => Some(customer.email.clone()),
            CustomerField::Photo => customer.photo.clone(),
            CustomerField::Gender => Some(customer.gender.to_string()),
            CustomerField::Phone => customer.phone.clone(),
            CustomerField::Birthday => customer.birthday.map(|d| d.to_string()),
            CustomerField::CreatedAt => Some(customer.created_at.to_string()),
            CustomerField::UpdatedAt => Some(customer.updated_at.to_string()),
        }
    }
}
