use sea_orm_migration::{prelude::*, schema::*};

use super::m20250302_000004_create_member_table::Member;
use super::m20250323_000010_create_ministry_table::Ministry;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MinistryMember::Table)
                    .if_not_exists()
                    .col(pk_auto(MinistryMember::Id))
                    .col(integer(MinistryMember::MinistryId))
                    .col(integer(MinistryMember::MemberId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ministry_member_ministry_id")
                            .from(MinistryMember::Table, MinistryMember::MinistryId)
                            .to(Ministry::Table, Ministry::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ministry_member_member_id")
                            .from(MinistryMember::Table, MinistryMember::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ministry_member_ministry_member")
                    .table(MinistryMember::Table)
                    .col(MinistryMember::MinistryId)
                    .col(MinistryMember::MemberId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MinistryMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MinistryMember {
    Table,
    Id,
    MinistryId,
    MemberId,
}
