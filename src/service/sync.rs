//! HQ sync service.
//!
//! The sync run is a stub: it counts the records the caller's scope would
//! push to denominational HQ and simulates the push without contacting any
//! external system. Every run lands in the audit log either way.

use chrono::{Duration, Utc};
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::data::sync::{CreateSyncLogParam, SyncLogRepository};
use crate::data::{
    attendance::AttendanceRepository, bacenta::BacentaRepository, member::MemberRepository,
};
use crate::error::AppError;
use crate::model::scope::Scope;
use crate::model::sync::{GetSyncLogsParam, PaginatedSyncLogs, SyncResult};

/// Status recorded when every record pushed.
const STATUS_COMPLETED: &str = "Completed";
/// Status recorded when some records failed the simulated push.
const STATUS_PARTIAL: &str = "Partial";

pub struct SyncService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SyncService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs one simulated sync and records it in the audit log.
    ///
    /// Counts the scoped members, attendance rows and meeting reports, then
    /// simulates pushing them: a small random share fails and the duration is
    /// drawn rather than measured, since no external call happens.
    ///
    /// # Arguments
    /// - `initiated_by` - The Bishop who triggered the run
    /// - `scope` - Visibility scope whose records are counted
    ///
    /// # Returns
    /// - `Ok(SyncResult)` - Push/failure counts, duration and status
    pub async fn run(&self, initiated_by: i32, scope: &Scope) -> Result<SyncResult, AppError> {
        let member_repo = MemberRepository::new(self.db);
        let attendance_repo = AttendanceRepository::new(self.db);
        let bacenta_repo = BacentaRepository::new(self.db);
        let sync_repo = SyncLogRepository::new(self.db);

        let started_at = Utc::now();

        let members = member_repo.count_in_scope(scope).await?;
        let attendance = attendance_repo.count_in_scope(scope).await?;
        let meetings = bacenta_repo.count_meetings_in_scope(scope).await?;
        let total = (members + attendance + meetings) as i32;

        // ThreadRng is !Send; keep it out of scope before the awaits below
        let (failed, duration_ms) = {
            let mut rng = rand::rng();
            let failed = if total > 0 {
                rng.random_range(0..=total / 20)
            } else {
                0
            };
            (failed, rng.random_range(250..2000))
        };
        let pushed = total - failed;

        let status = if failed == 0 {
            STATUS_COMPLETED
        } else {
            STATUS_PARTIAL
        };

        let finished_at = started_at + Duration::milliseconds(duration_ms);

        sync_repo
            .create(CreateSyncLogParam {
                initiated_by,
                started_at,
                finished_at,
                records_pushed: pushed,
                records_failed: failed,
                status: status.to_string(),
                detail: Some(format!(
                    "{members} members, {attendance} attendance rows, {meetings} meetings"
                )),
            })
            .await?;

        tracing::info!(
            "Sync run by user {}: {} pushed, {} failed ({})",
            initiated_by,
            pushed,
            failed,
            status
        );

        Ok(SyncResult {
            pushed,
            failed,
            duration_ms,
            status: status.to_string(),
        })
    }

    /// Gets the audit trail with pagination, newest first.
    pub async fn get_logs(&self, param: GetSyncLogsParam) -> Result<PaginatedSyncLogs, AppError> {
        let sync_repo = SyncLogRepository::new(self.db);

        let per_page = param.per_page;
        let page = param.page;
        let (logs, total) = sync_repo.get_all_paginated(param).await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedSyncLogs {
            logs,
            total,
            page,
            per_page,
            total_pages,
        })
    }
}
