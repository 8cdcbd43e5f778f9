use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_luxe_user::LuxeUser;

static IDX_NOTIFICATION_USER_ID: &str = "idx-luxe_notification-user_id";
static FK_NOTIFICATION_USER_ID: &str = "fk-luxe_notification-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LuxeNotification::Table)
                    .if_not_exists()
                    .col(pk_auto(LuxeNotification::Id))
                    .col(integer(LuxeNotification::UserId))
                    .col(string(LuxeNotification::Kind))
                    .col(text(LuxeNotification::Message))
                    .col(integer_null(LuxeNotification::OrderId))
                    .col(integer_null(LuxeNotification::ProductId))
                    .col(integer_null(LuxeNotification::ExpenseId))
                    .col(string_null(LuxeNotification::Action))
                    .col(string_null(LuxeNotification::Status))
                    .col(timestamp(LuxeNotification::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_NOTIFICATION_USER_ID)
                    .table(LuxeNotification::Table)
                    .col(LuxeNotification::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NOTIFICATION_USER_ID)
                    .from_tbl(LuxeNotification::Table)
                    .from_col(LuxeNotification::UserId)
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
                    .name(FK_NOTIFICATION_USER_ID)
                    .table(LuxeNotification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_NOTIFICATION_USER_ID)
                    .table(LuxeNotification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LuxeNotification::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum LuxeNotification {
    Table,
    Id,
    UserId,
    Kind,
    Message,
    OrderId,
    ProductId,
    ExpenseId,
    Action,
    Status,
    CreatedAt,
}
