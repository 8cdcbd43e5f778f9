use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_luxe_user::LuxeUser;

static IDX_ORDER_BUYER_ID: &str = "idx-luxe_order-buyer_id";
static FK_ORDER_BUYER_ID: &str = "fk-luxe_order-buyer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LuxeOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(LuxeOrder::Id))
                    .col(integer_null(LuxeOrder::BuyerId))
                    .col(double(LuxeOrder::TotalAmount))
                    .col(string(LuxeOrder::Status))
                    .col(timestamp(LuxeOrder::CreatedAt))
                    .col(timestamp(LuxeOrder::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ORDER_BUYER_ID)
                    .table(LuxeOrder::Table)
                    .col(LuxeOrder::BuyerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ORDER_BUYER_ID)
                    .from_tbl(LuxeOrder::Table)
                    .from_col(LuxeOrder::BuyerId)
                    .to_tbl(LuxeUser::Table)
                    .to_col(LuxeUser::Id)
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
                    .name(FK_ORDER_BUYER_ID)
                    .table(LuxeOrder::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ORDER_BUYER_ID)
                    .table(LuxeOrder::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LuxeOrder::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LuxeOrder {
    Table,
    Id,
    BuyerId,
    TotalAmount,
    Status,
    CreatedAt,
    UpdatedAt,
}
