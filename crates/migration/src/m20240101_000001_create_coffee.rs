//! Create `coffee` table.
//!
//! Ids are caller-supplied or generated UUID strings, so the key is text.
//! Neither column is length-limited.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Coffee::Table)
                    .if_not_exists()
                    .col(text(Coffee::Id).primary_key())
                    .col(text(Coffee::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Coffee::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Coffee { Table, Id, Name }
