use sea_orm::entity::prelude::*;

/// Outcome of a follow-up call to a member.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum CallOutcome {
    #[sea_orm(string_value = "Answered")]
    Answered,
    #[sea_orm(string_value = "No_Answer")]
    NoAnswer,
    #[sea_orm(string_value = "Switched_Off")]
    SwitchedOff,
    #[sea_orm(string_value = "Wrong_Number")]
    WrongNumber,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "call_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub member_id: i32,
    pub caller_id: i32,
    pub outcome: CallOutcome,
    pub notes: Option<String>,
    pub called_on: Date,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberId",
        to = "super::member::Column::Id"
    )]
    Member,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CallerId",
        to = "super::user::Column::Id"
    )]
    Caller,
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Caller.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
