use sea_orm::entity::prelude::*;

/// Engagement state of a member: Sheep attend regularly, Goats irregularly,
/// Deer live far away and commute in.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum MemberState {
    #[sea_orm(string_value = "Sheep")]
    Sheep,
    #[sea_orm(string_value = "Goat")]
    Goat,
    #[sea_orm(string_value = "Deer")]
    Deer,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub residence: Option<String>,
    pub area_id: i32,
    pub leader_id: Option<i32>,
    pub state: MemberState,
    pub photo_url: Option<String>,
    pub joined_on: Date,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::area::Entity",
        from = "Column::AreaId",
        to = "super::area::Column::Id"
    )]
    Area,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::LeaderId",
        to = "super::user::Column::Id"
    )]
    Leader,
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
    #[sea_orm(has_many = "super::call_log::Entity")]
    CallLog,
}

impl Related<super::area::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Area.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Leader.def()
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl Related<super::call_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CallLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
