use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240101_000002_create_shop_brands::ShopBrands;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(ProductType::Enum)
                    .values([ProductType::Deliverable, ProductType::Downloadable])
                    .to_owned(),
            )
            .await?;

        // Dimensions live on the variations; `has_variations` marks products
        // that have them.
        manager
            .create_table(
                Table::create()
                    .table(ShopProducts::Table)
                    .if_not_exists()
                    .col(pk_uuid(ShopProducts::Id))
                    .col(uuid_null(ShopProducts::ShopBrandId))
                    .col(string(ShopProducts::Name))
                    .col(string_null(ShopProducts::Slug).unique_key())
                    .col(string_null(ShopProducts::Sku).unique_key())
                    .col(string_null(ShopProducts::Barcode).unique_key())
                    .col(text_null(ShopProducts::Description))
                    .col(integer(ShopProducts::Qty).default(0))
                    .col(integer(ShopProducts::SecurityStock).default(0))
                    .col(boolean(ShopProducts::Featured).default(false))
                    .col(boolean(ShopProducts::IsVisible).default(false))
                    .col(boolean(ShopProducts::Backorder).default(false))
                    .col(boolean(ShopProducts::RequiresShipping).default(false))
                    .col(boolean(ShopProducts::HasVariations).default(false))
                    .col(double_null(ShopProducts::OldPrice))
                    .col(double_null(ShopProducts::Price))
                    .col(double_null(ShopProducts::Cost))
                    .col(
                        ColumnDef::new(ShopProducts::Type)
                            .enumeration(
                                ProductType::Enum,
                                [ProductType::Deliverable, ProductType::Downloadable],
                            )
                            .null(),
                    )
                    .col(date_null(ShopProducts::PublishedAt))
                    .col(string_len_null(ShopProducts::SeoTitle, 60))
                    .col(string_len_null(ShopProducts::SeoDescription, 160))
                    .col(
                        timestamp_with_time_zone(ShopProducts::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(ShopProducts::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(ShopProducts::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_products_shop_brand_id")
                            .from(ShopProducts::Table, ShopProducts::ShopBrandId)
                            .to(ShopBrands::Table, ShopBrands::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_shop_products_shop_brand_id", ShopProducts::ShopBrandId),
            ("idx_shop_products_deleted_at", ShopProducts::DeletedAt),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(ShopProducts::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER shop_products_touch_updated_at
                    BEFORE UPDATE ON shop_products
                    FOR EACH ROW
                    EXECUTE FUNCTION util.touch_updated_at()
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShopProducts::Table).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(ProductType::Enum).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum ShopProducts {
    Table,
    Id,
    ShopBrandId,
    Name,
    Slug,
    Sku,
    Barcode,
    Description,
    Qty,
    SecurityStock,
    Featured,
    IsVisible,
    Backorder,
    RequiresShipping,
    HasVariations,
    OldPrice,
    Price,
    Cost,
    Type,
    PublishedAt,
    SeoTitle,
    SeoDescription,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
enum ProductType {
    #[sea_orm(iden = "product_type")]
    Enum,
    #[sea_orm(iden = "deliverable")]
    Deliverable,
    #[sea_orm(iden = "downloadable")]
    Downloadable,
}
