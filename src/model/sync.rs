//! Sync log domain models and parameters.
//!
//! The sync endpoint simulates pushing scoped record counts to denominational
//! HQ; no external system is contacted. Each run is recorded in the audit log.

use chrono::{DateTime, Utc};

use crate::dto::sync::{PaginatedSyncLogsDto, SyncLogDto, SyncResultDto};

/// One recorded sync run.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncLogEntry {
    /// Database id of the run.
    pub id: i32,
    /// Bishop who initiated the run.
    pub initiated_by: i32,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// When the run finished.
    pub finished_at: DateTime<Utc>,
    /// Records pushed.
    pub records_pushed: i32,
    /// Records that failed.
    pub records_failed: i32,
    /// Terminal status of the run.
    pub status: String,
    /// Free-form detail, if any.
    pub detail: Option<String>,
}

impl SyncLogEntry {
    /// Converts the log entry domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `SyncLogDto` - The converted log entry
    pub fn into_dto(self) -> SyncLogDto {
        SyncLogDto {
            id: self.id,
            initiated_by: self.initiated_by,
            started_at: self.started_at,
            finished_at: self.finished_at,
            records_pushed: self.records_pushed,
            records_failed: self.records_failed,
            status: self.status,
            detail: self.detail,
        }
    }

    /// Converts an entity model to a log entry domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `SyncLogEntry` - The converted log entry domain model
    pub fn from_entity(entity: entity::sync_log::Model) -> Self {
        Self {
            id: entity.id,
            initiated_by: entity.initiated_by,
            started_at: entity.started_at,
            finished_at: entity.finished_at,
            records_pushed: entity.records_pushed,
            records_failed: entity.records_failed,
            status: entity.status,
            detail: entity.detail,
        }
    }
}

/// Outcome of one simulated sync run.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncResult {
    /// Records pushed.
    pub pushed: i32,
    /// Records that failed.
    pub failed: i32,
    /// Simulated duration of the run in milliseconds.
    pub duration_ms: i64,
    /// Terminal status of the run.
    pub status: String,
}

impl SyncResult {
    /// Converts the outcome to a DTO for API responses.
    ///
    /// # Returns
    /// - `SyncResultDto` - The converted outcome
    pub fn into_dto(self) -> SyncResultDto {
        SyncResultDto {
            pushed: self.pushed,
            failed: self.failed,
            duration_ms: self.duration_ms,
            status: self.status,
        }
    }
}

/// Parameters for paginated sync log queries.
#[derive(Debug, Clone)]
pub struct GetSyncLogsParam {
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of entries to return per page.
    pub per_page: u64,
}

/// Paginated collection of sync log entries with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedSyncLogs {
    /// Entries for this page, newest first.
    pub logs: Vec<SyncLogEntry>,
    /// Total number of entries across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of entries per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedSyncLogs {
    /// Converts the paginated logs domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `PaginatedSyncLogsDto` - The converted collection
    pub fn into_dto(self) -> PaginatedSyncLogsDto {
        PaginatedSyncLogsDto {
            logs: self.logs.into_iter().map(|l| l.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
