use sea_orm::entity::prelude::*;

/// Headcount taken at a ministry gathering. `(ministry_id, service_date)` is
/// unique -- one count per ministry per service day.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ministry_attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub ministry_id: i32,
    pub service_date: Date,
    pub headcount: i32,
    pub recorded_by: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ministry::Entity",
        from = "Column::MinistryId",
        to = "super::ministry::Column::Id"
    )]
    Ministry,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::RecordedBy",
        to = "super::user::Column::Id"
    )]
    Recorder,
}

impl Related<super::ministry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ministry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
