//! Create `wolves` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Wolves::Table)
                    .if_not_exists()
                    .col(pk_auto(Wolves::Id))
                    .col(string(Wolves::WolfName))
                    .col(integer(Wolves::WolfPower))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Wolves::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Wolves { Table, Id, WolfName, WolfPower }
