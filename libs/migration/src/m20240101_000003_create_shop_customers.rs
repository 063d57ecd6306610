use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(Gender::Enum)
                    .values([Gender::Male, Gender::Female])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ShopCustomers::Table)
                    .if_not_exists()
                    .col(pk_uuid(ShopCustomers::Id))
                    .col(string(ShopCustomers::Name))
                    .col(string(ShopCustomers::Email).unique_key())
                    .col(string_null(ShopCustomers::Photo))
                    .col(
                        ColumnDef::new(ShopCustomers::Gender)
                            .enumeration(Gender::Enum, [Gender::Male, Gender::Female])
                            .not_null(),
                    )
                    .col(string_null(ShopCustomers::Phone))
                    .col(date_null(ShopCustomers::Birthday))
                    .col(
                        timestamp_with_time_zone(ShopCustomers::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(ShopCustomers::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(ShopCustomers::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_shop_customers_deleted_at")
                    .table(ShopCustomers::Table)
                    .col(ShopCustomers::DeletedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER shop_customers_touch_updated_at
                    BEFORE UPDATE ON shop_customers
                    FOR EACH ROW
                    EXECUTE FUNCTION util.touch_updated_at()
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShopCustomers::Table).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(Gender::Enum).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum ShopCustomers {
    Table,
    Id,
    Name,
    Email,
    Photo,
    Gender,
    Phone,
    Birthday,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
enum Gender {
    #[sea_orm(iden = "gender")]
    Enum,
    #[sea_orm(iden = "male")]
    Male,
    #[sea_orm(iden = "female")]
    Female,
}
