pub use sea_orm_migration::prelude::*;

mod m20240101_000000_bootstrap;
mod m20240101_000001_create_users;
mod m20240101_000002_create_shop_brands;
mod m20240101_000003_create_shop_customers;
mod m20240101_000004_create_shop_products;
mod m20240101_000005_create_shop_products_variations;
mod m20240101_000006_create_media;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000000_bootstrap::Migration),
            Box::new(m20240101_000001_create_users::Migration),
            Box::new(m20240101_000002_create_shop_brands::Migration),
            Box::new(m20240101_000003_create_shop_customers::Migration),
            Box::new(m20240101_000004_create_shop_products::Migration),
            Box::new(m20240101_000005_create_shop_products_variations::Migration),
            Box::new(m20240101_000006_create_media::Migration),
        ]
    }
}
