use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_luxe_user::LuxeUser;

static IDX_PRODUCT_SELLER_ID: &str = "idx-luxe_product-seller_id";
static FK_PRODUCT_SELLER_ID: &str = "fk-luxe_product-seller_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LuxeProduct::Table)
                    .if_not_exists()
                    .col(pk_auto(LuxeProduct::Id))
                    .col(integer(LuxeProduct::SellerId))
                    .col(string(LuxeProduct::Name))
                    .col(double(LuxeProduct::Price))
                    .col(integer(LuxeProduct::Quantity))
                    .col(text_null(LuxeProduct::Description))
                    .col(string(LuxeProduct::Category))
                    .col(string(LuxeProduct::Image))
                    .col(timestamp(LuxeProduct::CreatedAt))
                    .col(timestamp(LuxeProduct::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRODUCT_SELLER_ID)
                    .table(LuxeProduct::Table)
                    .col(LuxeProduct::SellerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PRODUCT_SELLER_ID)
                    .from_tbl(LuxeProduct::Table)
                    .from_col(LuxeProduct::SellerId)
                    .to_tbl(LuxeUser::Table)
                    .to_col(LuxeUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PRODUCT_SELLER_ID)
                    .table(LuxeProduct::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRODUCT_SELLER_ID)
                    .table(LuxeProduct::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LuxeProduct::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LuxeProduct {
    Table,
    Id,
    SellerId,
    Name,
    Price,
    Quantity,
    Description,
    Category,
    Image,
    CreatedAt,
    UpdatedAt,
}
