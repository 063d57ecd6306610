//! Tokens persisted in `personal_access_tokens`.

use async_trait::async_trait;
use axum_helpers::{TokenRecord, TokenStore};
use chrono::Utc;
use eyre::WrapErr;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::entity::personal_access_token::{ActiveModel, Column, Entity};

pub const TOKEN_NAME: &str = "api-token";

/// [`TokenStore`] over the `personal_access_tokens` table.
///
/// A token is active while its row exists and `expires_at` is in the
/// future. Each successful check stamps `last_used_at`.
#[derive(Clone)]
pub struct PgTokenStore {
    db: DatabaseConnection,
}

impl PgTokenStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TokenStore for PgTokenStore {
    async fn save(&self, record: TokenRecord) -> eyre::Result<()> {
        let row = ActiveModel {
            id: Set(record.jti),
            user_id: Set(record.user_id),
            name: Set(TOKEN_NAME.to_string()),
            expires_at: Set(record.expires_at.into()),
            last_used_at: Set(None),
            created_at: Set(Utc::now().into()),
        };
        Entity::insert(row)
            .exec(&self.db)
            .await
            .wrap_err("Failed to store access token")?;
        Ok(())
    }

    async fn is_active(&self, jti: Uuid) -> eyre::Result<bool> {
        let now = Utc::now();
        let touched = Entity::update_many()
            .col_expr(Column::LastUsedAt, Expr::value(now))
            .filter(Column::Id.eq(jti))
            .filter(Column::ExpiresAt.gt(now))
            .exec(&self.db)
            .await
            .wrap_err("Failed to check access token")?;
        Ok(touched.rows_affected == 1)
    }

    async fn revoke(&self, jti: Uuid) -> eyre::Result<()> {
        Entity::delete_by_id(jti)
            .exec(&self.db)
            .await
            .wrap_err("Failed to revoke access token")?;
        Ok(())
    }
}
