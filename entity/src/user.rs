use sea_orm::entity::prelude::*;

/// Supervisory role of a leader. String values match the wire format used by
/// the API (`"Area_Pastor"` etc.).
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Role {
    #[sea_orm(string_value = "Bishop")]
    Bishop,
    #[sea_orm(string_value = "Governor")]
    Governor,
    #[sea_orm(string_value = "Area_Pastor")]
    AreaPastor,
    #[sea_orm(string_value = "Bacenta_Leader")]
    BacentaLeader,
    #[sea_orm(string_value = "Ministry_Leader")]
    MinistryLeader,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub role: Role,
    pub area_id: Option<i32>,
    pub photo_url: Option<String>,
    pub active: bool,
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
    #[sea_orm(has_many = "super::member::Entity")]
    Member,
    #[sea_orm(has_many = "super::bacenta_meeting::Entity")]
    BacentaMeeting,
    #[sea_orm(has_many = "super::notification::Entity")]
    Notification,
}

impl Related<super::area::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Area.def()
    }
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl Related<super::bacenta_meeting::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BacentaMeeting.def()
    }
}

impl Related<super::notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notification.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
