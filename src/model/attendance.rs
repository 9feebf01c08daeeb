//! Sunday attendance domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::dto::attendance::{AttendanceDto, AttendanceErrorDto, BulkAttendanceResultDto};

/// One member's attendance record for one Sunday service.
#[derive(Debug, Clone, PartialEq)]
pub struct Attendance {
    /// Database id of the row.
    pub id: i32,
    /// Member the row belongs to.
    pub member_id: i32,
    /// Sunday the service was held.
    pub service_date: NaiveDate,
    /// Whether the member was present.
    pub present: bool,
    /// Leader who captured the record.
    pub recorded_by: i32,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
}

impl Attendance {
    /// Converts the attendance domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `AttendanceDto` - The converted attendance DTO
    pub fn into_dto(self) -> AttendanceDto {
        AttendanceDto {
            id: self.id,
            member_id: self.member_id,
            service_date: self.service_date,
            present: self.present,
            recorded_by: self.recorded_by,
        }
    }

    /// Converts an entity model to an attendance domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Attendance` - The converted attendance domain model
    pub fn from_entity(entity: entity::attendance::Model) -> Self {
        Self {
            id: entity.id,
            member_id: entity.member_id,
            service_date: entity.service_date,
            present: entity.present,
            recorded_by: entity.recorded_by,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for recording one member's attendance.
#[derive(Debug, Clone)]
pub struct RecordAttendanceParam {
    /// Member the record is for.
    pub member_id: i32,
    /// Sunday the service was held.
    pub service_date: NaiveDate,
    /// Whether the member was present.
    pub present: bool,
}

/// One row of a bulk attendance submission.
#[derive(Debug, Clone)]
pub struct BulkAttendanceRecord {
    /// Member the record is for.
    pub member_id: i32,
    /// Whether the member was present.
    pub present: bool,
}

/// Parameters for recording a whole Sunday's attendance in one call.
#[derive(Debug, Clone)]
pub struct BulkAttendanceParam {
    /// Sunday the service was held.
    pub service_date: NaiveDate,
    /// Per-member rows.
    pub records: Vec<BulkAttendanceRecord>,
}

/// Per-item failure from a bulk attendance submission.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceError {
    /// Member the failure applies to.
    pub member_id: i32,
    /// Human-readable reason.
    pub error: String,
}

/// Outcome of a bulk attendance submission.
///
/// Out-of-scope, unknown and already-recorded members are collected here;
/// they never abort the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkAttendanceResult {
    /// Number of rows successfully recorded.
    pub recorded: u64,
    /// Per-member failures.
    pub errors: Vec<AttendanceError>,
}

impl BulkAttendanceResult {
    /// Converts the bulk outcome to a DTO for API responses.
    ///
    /// # Returns
    /// - `BulkAttendanceResultDto` - The converted outcome
    pub fn into_dto(self) -> BulkAttendanceResultDto {
        BulkAttendanceResultDto {
            recorded: self.recorded,
            errors: self
                .errors
                .into_iter()
                .map(|e| AttendanceErrorDto {
                    member_id: e.member_id,
                    error: e.error,
                })
                .collect(),
        }
    }
}
