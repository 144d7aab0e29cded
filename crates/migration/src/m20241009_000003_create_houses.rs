//! Create `houses` table.
//!
//! `pig_id` is optional, but when present it must point at an existing pig;
//! a pig that still owns houses cannot be deleted.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Houses::Table)
                    .if_not_exists()
                    .col(pk_auto(Houses::Id))
                    .col(string(Houses::HouseType))
                    .col(integer(Houses::HouseSturdiness))
                    .col(integer_null(Houses::PigId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_houses_pig")
                            .from(Houses::Table, Houses::PigId)
                            .to(Pigs::Table, Pigs::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Houses::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Houses { Table, Id, HouseType, HouseSturdiness, PigId }

#[derive(DeriveIden)]
enum Pigs { Table, Id }
