use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_luxe_user::LuxeUser;

static IDX_EXPENSE_USER_ID: &str = "idx-luxe_expense-user_id";
static FK_EXPENSE_USER_ID: &str = "fk-luxe_expense-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LuxeExpense::Table)
                    .if_not_exists()
                    .col(pk_auto(LuxeExpense::Id))
                    .col(integer(LuxeExpense::UserId))
                    .col(string(LuxeExpense::Title))
                    .col(string(LuxeExpense::Kind))
                    .col(double(LuxeExpense::Amount))
                    .col(string(LuxeExpense::Category))
                    .col(string(LuxeExpense::PaymentMethod))
                    .col(text_null(LuxeExpense::Note))
                    .col(date(LuxeExpense::Date))
                    .col(timestamp(LuxeExpense::CreatedAt))
                    .col(timestamp(LuxeExpense::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EXPENSE_USER_ID)
                    .table(LuxeExpense::Table)
                    .col(LuxeExpense::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EXPENSE_USER_ID)
                    .from_tbl(LuxeExpense::Table)
                    .from_col(LuxeExpense::UserId)
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
                    .name(FK_EXPENSE_USER_ID)
                    .table(LuxeExpense::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EXPENSE_USER_ID)
                    .table(LuxeExpense::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LuxeExpense::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum LuxeExpense {
    Table,
    Id,
    UserId,
    Title,
    Kind,
    Amount,
    Category,
    PaymentMethod,
    Note,
    Date,
    CreatedAt,
    UpdatedAt,
}
