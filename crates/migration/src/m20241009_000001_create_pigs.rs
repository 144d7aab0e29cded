//! Create `pigs` table.
//!
//! Referenced by `houses.pig_id`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pigs::Table)
                    .if_not_exists()
                    .col(pk_auto(Pigs::Id))
                    .col(string(Pigs::PigHouse))
                    .col(string(Pigs::PigName))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Pigs::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Pigs { Table, Id, PigHouse, PigName }
