use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::model::sync::{GetSyncLogsParam, SyncLogEntry};

/// Insert parameters for one finished sync run.
#[derive(Debug, Clone)]
pub struct CreateSyncLogParam {
    pub initiated_by: i32,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub records_pushed: i32,
    pub records_failed: i32,
    pub status: String,
    pub detail: Option<String>,
}

pub struct SyncLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SyncLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records one finished sync run
    pub async fn create(&self, param: CreateSyncLogParam) -> Result<SyncLogEntry, DbErr> {
        let entity = entity::sync_log::ActiveModel {
            initiated_by: ActiveValue::Set(param.initiated_by),
            started_at: ActiveValue::Set(param.started_at),
            finished_at: ActiveValue::Set(param.finished_at),
            records_pushed: ActiveValue::Set(param.records_pushed),
            records_failed: ActiveValue::Set(param.records_failed),
            status: ActiveValue::Set(param.status),
            detail: ActiveValue::Set(param.detail),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(SyncLogEntry::from_entity(entity))
    }

    /// Gets the audit trail with pagination, newest first
    pub async fn get_all_paginated(
        &self,
        param: GetSyncLogsParam,
    ) -> Result<(Vec<SyncLogEntry>, u64), DbErr> {
        let paginator = entity::prelude::SyncLog::find()
            .order_by_desc(entity::sync_log::Column::StartedAt)
            .order_by_desc(entity::sync_log::Column::Id)
            .paginate(self.db, param.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(param.page).await?;
        let logs = entities.into_iter().map(SyncLogEntry::from_entity).collect();

        Ok((logs, total))
    }
}
