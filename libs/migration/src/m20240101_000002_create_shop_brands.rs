use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShopBrands::Table)
                    .if_not_exists()
                    .col(pk_uuid(ShopBrands::Id))
                    .col(string(ShopBrands::Name))
                    .col(string(ShopBrands::Slug).unique_key())
                    .col(string_null(ShopBrands::Website))
                    .col(text_null(ShopBrands::Description))
                    .col(integer_null(ShopBrands::Position))
                    .col(boolean(ShopBrands::IsVisible).default(false))
                    .col(string_len_null(ShopBrands::SeoTitle, 60))
                    .col(string_len_null(ShopBrands::SeoDescription, 160))
                    .col(integer_null(ShopBrands::Sort))
                    .col(
                        timestamp_with_time_zone(ShopBrands::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(ShopBrands::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(ShopBrands::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_shop_brands_deleted_at")
                    .table(ShopBrands::Table)
                    .col(ShopBrands::DeletedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER shop_brands_touch_updated_at
                    BEFORE UPDATE ON shop_brands
                    FOR EACH ROW
                    EXECUTE FUNCTION util.touch_updated_at()
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShopBrands::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum ShopBrands {
    Table,
    Id,
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
    DeletedAt,
}
