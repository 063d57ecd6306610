use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::{entity::user, error::UserResult, models::User, repository::UserRepository};

#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: User) -> UserResult<User> {
        // Unique violations on `users_email_key` surface as EmailTaken.
        let model = user::ActiveModel::from(user).insert(&self.db).await?;
        tracing::info!(user_id = %model.id, "User registered");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let model = user::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;
        Ok(model.map(User::from))
    }
}
