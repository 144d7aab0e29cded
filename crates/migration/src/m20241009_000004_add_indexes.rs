use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("ix_pigs_id")
                    .table(Pigs::Table)
                    .col(Pigs::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_wolves_id")
                    .table(Wolves::Table)
                    .col(Wolves::Id)
                    .to_owned(),
            )
            .await?;

        // Houses: id index plus the FK column used by the pig -> houses lookup
        manager
            .create_index(
                Index::create()
                    .name("ix_houses_id")
                    .table(Houses::Table)
                    .col(Houses::Id)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("ix_houses_pig_id")
                    .table(Houses::Table)
                    .col(Houses::PigId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("ix_houses_pig_id").table(Houses::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("ix_houses_id").table(Houses::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("ix_wolves_id").table(Wolves::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("ix_pigs_id").table(Pigs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Pigs { Table, Id }

#[derive(DeriveIden)]
enum Wolves { Table, Id }

#[derive(DeriveIden)]
enum Houses { Table, Id, PigId }
