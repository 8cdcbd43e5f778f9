pub use sea_orm_migration::prelude::*;

mod m20251101_000001_luxe_user;
mod m20251101_000002_luxe_product;
mod m20251101_000003_luxe_cart_item;
mod m20251101_000004_luxe_order;
mod m20251101_000005_luxe_order_item;
mod m20251101_000006_luxe_expense;
mod m20251101_000007_luxe_notification;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_luxe_user::Migration),
            Box::new(m20251101_000002_luxe_product::Migration),
            Box::new(m20251101_000003_luxe_cart_item::Migration),
            Box::new(m20251101_000004_luxe_order::Migration),
            Box::new(m20251101_000005_luxe_order_item::Migration),
            Box::new(m20251101_000006_luxe_expense::Migration),
            Box::new(m20251101_000007_luxe_notification::Migration),
        ]
    }
}
