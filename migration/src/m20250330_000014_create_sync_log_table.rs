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
                    .table(SyncLog::Table)
                    .if_not_exists()
                    .col(pk_auto(SyncLog::Id))
                    .col(integer(SyncLog::InitiatedBy))
                    .col(timestamp_with_time_zone(SyncLog::StartedAt))
                    .col(timestamp_with_time_zone(SyncLog::FinishedAt))
                    .col(integer(SyncLog::RecordsPushed))
                    .col(integer(SyncLog::RecordsFailed))
                    .col(string(SyncLog::Status))
                    .col(text_null(SyncLog::Detail))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sync_log_initiated_by")
                            .from(SyncLog::Table, SyncLog::InitiatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SyncLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SyncLog {
    Table,
    Id,
    InitiatedBy,
    StartedAt,
    FinishedAt,
    RecordsPushed,
    RecordsFailed,
    Status,
    Detail,
}
