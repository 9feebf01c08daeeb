use sea_orm_migration::{prelude::*, schema::*};

use super::m20250302_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BacentaMeeting::Table)
                    .if_not_exists()
                    .col(pk_auto(BacentaMeeting::Id))
                    .col(integer(BacentaMeeting::LeaderId))
                    .col(date(BacentaMeeting::MeetingDate))
                    .col(string_null(BacentaMeeting::Venue))
                    .col(string_null(BacentaMeeting::Topic))
                    .col(
                        timestamp_with_time_zone(BacentaMeeting::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bacenta_meeting_leader_id")
                            .from(BacentaMeeting::Table, BacentaMeeting::LeaderId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A leader holds at most one meeting per day.
        manager
            .create_index(
                Index::create()
                    .name("idx_bacenta_meeting_leader_date")
                    .table(BacentaMeeting::Table)
                    .col(BacentaMeeting::LeaderId)
                    .col(BacentaMeeting::MeetingDate)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BacentaMeeting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BacentaMeeting {
    Table,
    Id,
    LeaderId,
    MeetingDate,
    Venue,
    Topic,
    CreatedAt,
}
