use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240101_000004_create_shop_products::ShopProducts;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Media::Table)
                    .if_not_exists()
                    .col(pk_uuid(Media::Id))
                    .col(uuid(Media::ProductId))
                    .col(string(Media::CollectionName))
                    .col(string(Media::FileName))
                    .col(string(Media::MimeType))
                    .col(big_integer(Media::Size))
                    .col(string(Media::Path))
                    .col(
                        timestamp_with_time_zone(Media::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_media_product_id")
                            .from(Media::Table, Media::ProductId)
                            .to(ShopProducts::Table, ShopProducts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_media_product_collection")
                    .table(Media::Table)
                    .col(Media::ProductId)
                    .col(Media::CollectionName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Media::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Media {
    Table,
    Id,
    ProductId,
    CollectionName,
    FileName,
    MimeType,
    Size,
    Path,
    CreatedAt,
}
