//! Migration: Create clubs table.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clubs::Table)
                    .if_not_exists()
                    .col(uuid(Clubs::Id).primary_key())
                    .col(string(Clubs::Name))
                    .col(date(Clubs::FoundingDate))
                    // Length is enforced by the service; the column just has to fit it
                    .col(string_len(Clubs::Description, 100))
                    .col(string(Clubs::Image))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Clubs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Clubs {
    Table,
    Id,
    Name,
    FoundingDate,
    Description,
    Image,
}
