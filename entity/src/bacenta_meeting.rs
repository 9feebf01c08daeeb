use sea_orm::entity::prelude::*;

/// Weekly house-church meeting held by one leader. `(leader_id, meeting_date)`
/// is unique -- a leader holds at most one meeting per day.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bacenta_meeting")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub leader_id: i32,
    pub meeting_date: Date,
    pub venue: Option<String>,
    pub topic: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::LeaderId",
        to = "super::user::Column::Id"
    )]
    Leader,
    #[sea_orm(has_many = "super::bacenta_attendance::Entity")]
    BacentaAttendance,
    #[sea_orm(has_many = "super::bacenta_offering::Entity")]
    BacentaOffering,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Leader.def()
    }
}

impl Related<super::bacenta_attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BacentaAttendance.def()
    }
}

impl Related<super::bacenta_offering::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BacentaOffering.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
