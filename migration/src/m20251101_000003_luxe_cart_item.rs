use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_luxe_user::LuxeUser, m20251101_000002_luxe_product::LuxeProduct};

static IDX_CART_ITEM_USER_ID: &str = "idx-luxe_cart_item-user_id";
static FK_CART_ITEM_USER_ID: &str = "fk-luxe_cart_item-user_id";
static FK_CART_ITEM_PRODUCT_ID: &str = "fk-luxe_cart_item-product_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LuxeCartItem::Table)
                    .if_not_exists()
                    .col(pk_auto(LuxeCartItem::Id))
                    .col(integer(LuxeCartItem::UserId))
                    .col(integer(LuxeCartItem::ProductId))
                    .col(integer(LuxeCartItem::Quantity))
                    .col(timestamp(LuxeCartItem::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CART_ITEM_USER_ID)
                    .table(LuxeCartItem::Table)
                    .col(LuxeCartItem::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CART_ITEM_USER_ID)
                    .from_tbl(LuxeCartItem::Table)
                    .from_col(LuxeCartItem::UserId)
                    .to_tbl(LuxeUser::Table)
                    .to_col(LuxeUser::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CART_ITEM_PRODUCT_ID)
                    .from_tbl(LuxeCartItem::Table)
                    .from_col(LuxeCartItem::ProductId)
                    .to_tbl(LuxeProduct::Table)
                    .to_col(LuxeProduct::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CART_ITEM_PRODUCT_ID)
                    .table(LuxeCartItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CART_ITEM_USER_ID)
                    .table(LuxeCartItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CART_ITEM_USER_ID)
                    .table(LuxeCartItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LuxeCartItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum LuxeCartItem {
    Table,
    Id,
    UserId,
    ProductId,
    Quantity,
    CreatedAt,
}
