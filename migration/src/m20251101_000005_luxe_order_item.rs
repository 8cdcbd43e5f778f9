use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000002_luxe_product::LuxeProduct, m20251101_000004_luxe_order::LuxeOrder};

static IDX_ORDER_ITEM_ORDER_ID: &str = "idx-luxe_order_item-order_id";
static IDX_ORDER_ITEM_PRODUCT_ID: &str = "idx-luxe_order_item-product_id";
static FK_ORDER_ITEM_ORDER_ID: &str = "fk-luxe_order_item-order_id";
static FK_ORDER_ITEM_PRODUCT_ID: &str = "fk-luxe_order_item-product_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LuxeOrderItem::Table)
                    .if_not_exists()
                    .col(pk_auto(LuxeOrderItem::Id))
                    .col(integer(LuxeOrderItem::OrderId))
                    .col(integer_null(LuxeOrderItem::ProductId))
                    .col(string(LuxeOrderItem::Name))
                    .col(double(LuxeOrderItem::Price))
                    .col(integer(LuxeOrderItem::Quantity))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ORDER_ITEM_ORDER_ID)
                    .table(LuxeOrderItem::Table)
                    .col(LuxeOrderItem::OrderId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ORDER_ITEM_PRODUCT_ID)
                    .table(LuxeOrderItem::Table)
                    .col(LuxeOrderItem::ProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ORDER_ITEM_ORDER_ID)
                    .from_tbl(LuxeOrderItem::Table)
                    .from_col(LuxeOrderItem::OrderId)
                    .to_tbl(LuxeOrder::Table)
                    .to_col(LuxeOrder::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ORDER_ITEM_PRODUCT_ID)
                    .from_tbl(LuxeOrderItem::Table)
                    .from_col(LuxeOrderItem::ProductId)
                    .to_tbl(LuxeProduct::Table)
                    .to_col(LuxeProduct::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ORDER_ITEM_PRODUCT_ID)
                    .table(LuxeOrderItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ORDER_ITEM_ORDER_ID)
                    .table(LuxeOrderItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ORDER_ITEM_PRODUCT_ID)
                    .table(LuxeOrderItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ORDER_ITEM_ORDER_ID)
                    .table(LuxeOrderItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LuxeOrderItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum LuxeOrderItem {
    Table,
    Id,
    OrderId,
    ProductId,
    Name,
    Price,
    Quantity,
}
