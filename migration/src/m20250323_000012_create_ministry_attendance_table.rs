use sea_orm_migration::{prelude::*, schema::*};

use super::m20250302_000001_create_user_table::User;
use super::m20250323_000010_create_ministry_table::Ministry;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MinistryAttendance::Table)
                    .if_not_exists()
                    .col(pk_auto(MinistryAttendance::Id))
                    .col(integer(MinistryAttendance::MinistryId))
                    .col(date(MinistryAttendance::ServiceDate))
                    .col(integer(MinistryAttendance::Headcount))
                    .col(integer(MinistryAttendance::RecordedBy))
                    .col(
                        timestamp_with_time_zone(MinistryAttendance::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ministry_attendance_ministry_id")
                            .from(MinistryAttendance::Table, MinistryAttendance::MinistryId)
                            .to(Ministry::Table, Ministry::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ministry_attendance_recorded_by")
                            .from(MinistryAttendance::Table, MinistryAttendance::RecordedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One tally per ministry per service day.
        manager
            .create_index(
                Index::create()
                    .name("idx_ministry_attendance_ministry_date")
                    .table(MinistryAttendance::Table)
                    .col(MinistryAttendance::MinistryId)
                    .col(MinistryAttendance::ServiceDate)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MinistryAttendance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MinistryAttendance {
    Table,
    Id,
    MinistryId,
    ServiceDate,
    Headcount,
    RecordedBy,
    CreatedAt,
}
