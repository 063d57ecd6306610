use database::SoftDelete;
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::models::{Customer, Gender};

/// Sea-ORM entity for the `shop_customers` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "shop_customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub photo: Option<String>,
    pub gender: Gender,
    pub phone: Option<String>,
    pub birthday: Option<Date>,
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

impl From<Model> for Customer {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            photo: model.photo,
            gender: model.gender,
            phone: model.phone,
            birthday: model.birthday,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
            deleted_at: model.deleted_at.map(Into::into),
        }
    }
}

impl From<Customer> for ActiveModel {
    fn from(customer: Customer) -> Self {
        ActiveModel {
            id: Set(customer.id),
            name: Set(customer.name),
            email: Set(customer.email),
            photo: Set(customer.photo),
            gender: Set(customer.gender),
            phone: Set(customer.phone),
            birthday: Set(customer.birthday),
            created_at: Set(customer.created_at.into()),
            updated_at: Set(customer.updated_at.into()),
            deleted_at: Set(customer.deleted_at.map(Into::into)),
        }
    }
}
