use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250302_000001_create_user_table::User, m20250302_000003_create_area_table::Area,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(pk_auto(Member::Id))
                    .col(string(Member::FirstName))
                    .col(string(Member::LastName))
                    .col(string_null(Member::Phone))
                    .col(string_null(Member::Residence))
                    .col(integer(Member::AreaId))
                    .col(integer_null(Member::LeaderId))
                    .col(string_len(Member::State, 8))
                    .col(string_null(Member::PhotoUrl))
                    .col(date(Member::JoinedOn))
                    .col(
                        timestamp_with_time_zone(Member::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_area_id")
                            .from(Member::Table, Member::AreaId)
                            .to(Area::Table, Area::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_leader_id")
                            .from(Member::Table, Member::LeaderId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    FirstName,
    LastName,
    Phone,
    Residence,
    AreaId,
    LeaderId,
    State,
    PhotoUrl,
    JoinedOn,
    CreatedAt,
}
