//! Migration: Create the club/member join table.
//!
//! Rows cascade away with either side, so deleting a member or a club
//! never leaves a dangling association.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClubMembers::Table)
                    .if_not_exists()
                    .col(uuid(ClubMembers::ClubId))
                    .col(uuid(ClubMembers::MemberId))
                    .primary_key(
                        Index::create()
                            .name("pk_club_members")
                            .col(ClubMembers::ClubId)
                            .col(ClubMembers::MemberId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_club_members_club")
                            .from(ClubMembers::Table, ClubMembers::ClubId)
                            .to(Clubs::Table, Clubs::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_club_members_member")
                            .from(ClubMembers::Table, ClubMembers::MemberId)
                            .to(Members::Table, Members::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookups by member (cascade deletes) do not hit the primary key prefix
        manager
            .create_index(
                Index::create()
                    .name("idx_club_members_member_id")
                    .table(ClubMembers::Table)
                    .col(ClubMembers::MemberId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_club_members_member_id")
                    .table(ClubMembers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ClubMembers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ClubMembers {
    Table,
    ClubId,
    MemberId,
}

#[derive(DeriveIden)]
enum Clubs {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Members {
    Table,
    Id,
}
