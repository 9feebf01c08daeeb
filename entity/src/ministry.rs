use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ministry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub leader_id: Option<i32>,
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
    #[sea_orm(has_many = "super::ministry_member::Entity")]
    MinistryMember,
    #[sea_orm(has_many = "super::ministry_attendance::Entity")]
    MinistryAttendance,
}

impl Related<super::ministry_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MinistryMember.def()
    }
}

impl Related<super::ministry_attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MinistryAttendance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
