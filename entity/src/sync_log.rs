use sea_orm::entity::prelude::*;

/// Audit trail for runs of the (simulated) HQ sync endpoint.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sync_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub initiated_by: i32,
    pub started_at: DateTimeUtc,
    pub finished_at: DateTimeUtc,
    pub records_pushed: i32,
    pub records_failed: i32,
    pub status: String,
    pub detail: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::InitiatedBy",
        to = "super::user::Column::Id"
    )]
    Initiator,
}

impl ActiveModelBehavior for ActiveModel {}
