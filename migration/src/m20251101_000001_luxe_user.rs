use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LuxeUser::Table)
                    .if_not_exists()
                    .col(pk_auto(LuxeUser::Id))
                    .col(string(LuxeUser::Name))
                    .col(string_uniq(LuxeUser::Email))
                    .col(string(LuxeUser::PasswordHash))
                    .col(string(LuxeUser::Image))
                    .col(timestamp(LuxeUser::CreatedAt))
                    .col(timestamp(LuxeUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LuxeUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LuxeUser {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Image,
    CreatedAt,
    UpdatedAt,
}
