use sea_orm_migration::{prelude::*, schema::*};

use super::m20250316_000007_create_bacenta_meeting_table::BacentaMeeting;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BacentaOffering::Table)
                    .if_not_exists()
                    .col(pk_auto(BacentaOffering::Id))
                    .col(integer(BacentaOffering::MeetingId))
                    .col(big_integer(BacentaOffering::AmountMinor))
                    .col(string_null(BacentaOffering::Note))
                    .col(
                        timestamp_with_time_zone(BacentaOffering::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bacenta_offering_meeting_id")
                            .from(BacentaOffering::Table, BacentaOffering::MeetingId)
                            .to(BacentaMeeting::Table, BacentaMeeting::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BacentaOffering::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BacentaOffering {
    Table,
    Id,
    MeetingId,
    AmountMinor,
    Note,
    CreatedAt,
}
