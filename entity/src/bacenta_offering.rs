use sea_orm::entity::prelude::*;

/// Offering collected at a bacenta meeting. Amounts are integer minor
/// currency units (e.g. pesewas), never floats.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bacenta_offering")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub meeting_id: i32,
    pub amount_minor: i64,
    pub note: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bacenta_meeting::Entity",
        from = "Column::MeetingId",
        to = "super::bacenta_meeting::Column::Id"
    )]
    Meeting,
}

impl Related<super::bacenta_meeting::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Meeting.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
