use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250302_000001_create_user_table::User, m20250302_000004_create_member_table::Member,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(pk_auto(Attendance::Id))
                    .col(integer(Attendance::MemberId))
                    .col(date(Attendance::ServiceDate))
                    .col(boolean(Attendance::Present))
                    .col(integer(Attendance::RecordedBy))
                    .col(
                        timestamp_with_time_zone(Attendance::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_member_id")
                            .from(Attendance::Table, Attendance::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_recorded_by")
                            .from(Attendance::Table, Attendance::RecordedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per member per Sunday.
        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_member_service_date")
                    .table(Attendance::Table)
                    .col(Attendance::MemberId)
                    .col(Attendance::ServiceDate)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Attendance {
    Table,
    Id,
    MemberId,
    ServiceDate,
    Present,
    RecordedBy,
    CreatedAt,
}
