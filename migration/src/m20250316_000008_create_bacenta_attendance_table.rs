use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250302_000004_create_member_table::Member,
    m20250316_000007_create_bacenta_meeting_table::BacentaMeeting,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BacentaAttendance::Table)
                    .if_not_exists()
                    .col(pk_auto(BacentaAttendance::Id))
                    .col(integer(BacentaAttendance::MeetingId))
                    .col(integer(BacentaAttendance::MemberId))
                    .col(boolean(BacentaAttendance::FirstTimer).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bacenta_attendance_meeting_id")
                            .from(BacentaAttendance::Table, BacentaAttendance::MeetingId)
                            .to(BacentaMeeting::Table, BacentaMeeting::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bacenta_attendance_member_id")
                            .from(BacentaAttendance::Table, BacentaAttendance::MemberId)
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
                    .name("idx_bacenta_attendance_meeting_member")
                    .table(BacentaAttendance::Table)
                    .col(BacentaAttendance::MeetingId)
                    .col(BacentaAttendance::MemberId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BacentaAttendance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BacentaAttendance {
    Table,
    Id,
    MeetingId,
    MemberId,
    FirstTimer,
}
