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
                    .table(Ministry::Table)
                    .if_not_exists()
                    .col(pk_auto(Ministry::Id))
                    .col(string_uniq(Ministry::Name))
                    .col(integer_null(Ministry::LeaderId))
                    .col(
                        timestamp_with_time_zone(Ministry::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ministry_leader_id")
                            .from(Ministry::Table, Ministry::LeaderId)
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
            .drop_table(Table::drop().table(Ministry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ministry {
    Table,
    Id,
    Name,
    LeaderId,
    CreatedAt,
}
