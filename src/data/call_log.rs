use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::call_log::{CallLog, LogCallParam};

pub struct CallLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CallLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Logs a call to a member
    pub async fn create(&self, param: LogCallParam) -> Result<CallLog, DbErr> {
        let entity = entity::call_log::ActiveModel {
            member_id: ActiveValue::Set(param.member_id),
            caller_id: ActiveValue::Set(param.caller_id),
            outcome: ActiveValue::Set(param.outcome),
            notes: ActiveValue::Set(param.notes),
            called_on: ActiveValue::Set(param.called_on),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(CallLog::from_entity(entity))
    }

    /// Gets a member's call history, newest first
    pub async fn get_by_member(&self, member_id: i32) -> Result<Vec<CallLog>, DbErr> {
        let entities = entity::prelude::CallLog::find()
            .filter(entity::call_log::Column::MemberId.eq(member_id))
            .order_by_desc(entity::call_log::Column::CalledOn)
            .order_by_desc(entity::call_log::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CallLog::from_entity).collect())
    }
}
