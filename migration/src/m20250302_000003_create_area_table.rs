use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250302_000001_create_user_table::User, m20250302_000002_create_region_table::Region,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Area::Table)
                    .if_not_exists()
                    .col(pk_auto(Area::Id))
                    .col(string(Area::Name))
                    .col(integer(Area::RegionId))
                    .col(integer_null(Area::OverseerId))
                    .col(
                        timestamp_with_time_zone(Area::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_area_region_id")
                            .from(Area::Table, Area::RegionId)
                            .to(Region::Table, Region::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_area_overseer_id")
                            .from(Area::Table, Area::OverseerId)
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
            .drop_table(Table::drop().table(Area::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Area {
    Table,
    Id,
    Name,
    RegionId,
    OverseerId,
    CreatedAt,
}
