//! Sea-ORM entities for accounts and their bearer tokens.

pub mod user {
    use sea_orm::ActiveValue::Set;
    use sea_orm::entity::prelude::*;

    use crate::models::User;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "users")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub name: String,
        #[sea_orm(unique)]
        pub email: String,
        pub password_hash: String,
        pub created_at: DateTimeWithTimeZone,
        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::personal_access_token::Entity")]
        PersonalAccessTokens,
    }

    impl Related<super::personal_access_token::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::PersonalAccessTokens.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl From<Model> for User {
        fn from(model: Model) -> Self {
            Self {
                id: model.id,
                name: model.name,
                email: model.email,
                password_hash: model.password_hash,
                created_at: model.created_at.into(),
                updated_at: model.updated_at.into(),
            }
        }
    }

    impl From<User> for ActiveModel {
        fn from(user: User) -> Self {
            ActiveModel {
                id: Set(user.id),
                name: Set(user.name),
                email: Set(user.email),
                password_hash: Set(user.password_hash),
                created_at: Set(user.created_at.into()),
                updated_at: Set(user.updated_at.into()),
            }
        }
    }
}

pub mod personal_access_token {
    use sea_orm::entity::prelude::*;

    /// One row per issued token; `id` is the JWT `jti`.
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "personal_access_tokens")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub user_id: Uuid,
        pub name: String,
        pub expires_at: DateTimeWithTimeZone,
        pub last_used_at: Option<DateTimeWithTimeZone>,
        pub created_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::user::Entity",
            from = "Column::UserId",
            to = "super::user::Column::Id",
            on_delete = "Cascade"
        )]
        User,
    }

    impl Related<super::user::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::User.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
