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
                    .table(ShopProductsVariations::Table)
                    .if_not_exists()
                    .col(pk_uuid(ShopProductsVariations::Id))
                    .col(uuid(ShopProductsVariations::ShopProductId))
                    .col(string_null(ShopProductsVariations::Size))
                    .col(string_null(ShopProductsVariations::Color))
                    .col(boolean(ShopProductsVariations::RequiresShipping).default(false))
                    .col(string(ShopProductsVariations::WeightUnit).default("kg"))
                    .col(double_null(ShopProductsVariations::WeightValue))
                    .col(string(ShopProductsVariations::HeightUnit).default("cm"))
                    .col(double_null(ShopProductsVariations::HeightValue))
                    .col(string(ShopProductsVariations::WidthUnit).default("cm"))
                    .col(double_null(ShopProductsVariations::WidthValue))
                    .col(string(ShopProductsVariations::DepthUnit).default("cm"))
                    .col(double_null(ShopProductsVariations::DepthValue))
                    .col(string(ShopProductsVariations::VolumeUnit).default("l"))
                    .col(double_null(ShopProductsVariations::VolumeValue))
                    .col(double_null(ShopProductsVariations::OldPrice))
                    .col(double_null(ShopProductsVariations::Price))
                    .col(double_null(ShopProductsVariations::Cost))
                    .col(date_null(ShopProductsVariations::PublishedAt))
                    .col(string_len_null(ShopProductsVariations::SeoTitle, 60))
                    .col(string_len_null(ShopProductsVariations::SeoDescription, 160))
                    .col(
                        timestamp_with_time_zone(ShopProductsVariations::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(ShopProductsVariations::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(
                        ShopProductsVariations::DeletedAt,
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_products_variations_shop_product_id")
                            .from(
                                ShopProductsVariations::Table,
                                ShopProductsVariations::ShopProductId,
                            )
                            .to(ShopProducts::Table, ShopProducts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_shop_products_variations_shop_product_id")
                    .table(ShopProductsVariations::Table)
                    .col(ShopProductsVariations::ShopProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER shop_products_variations_touch_updated_at
                    BEFORE UPDATE ON shop_products_variations
                    FOR EACH ROW
                    EXECUTE FUNCTION util.touch_updated_at()
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShopProductsVariations::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum ShopProductsVariations {
    Table,
    Id,
    ShopProductId,
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
    DeletedAt,
}
