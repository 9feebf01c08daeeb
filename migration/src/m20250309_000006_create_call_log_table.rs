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
                    .table(CallLog::Table)
                    .if_not_exists()
                    .col(pk_auto(CallLog::Id))
                    .col(integer(CallLog::MemberId))
                    .col(integer(CallLog::CallerId))
                    .col(string_len(CallLog::Outcome, 16))
                    .col(text_null(CallLog::Notes))
                    .col(date(CallLog::CalledOn))
                    .col(
                        timestamp_with_time_zone(CallLog::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_call_log_member_id")
                            .from(CallLog::Table, CallLog::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_call_log_caller_id")
                            .from(CallLog::Table, CallLog::CallerId)
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
            .drop_table(Table::drop().table(CallLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CallLog {
    Table,
    Id,
    MemberId,
    CallerId,
    Outcome,
    Notes,
    CalledOn,
    CreatedAt,
}
