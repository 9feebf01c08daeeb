//! Ministry domain models and parameters.
//!
//! Ministries (choir, ushers, media and the like) cut across the area
//! hierarchy: they have their own rosters and their own attendance tallies.

use chrono::{DateTime, NaiveDate, Utc};

use crate::dto::ministry::{MinistryAttendanceDto, MinistryDto};

/// A ministry of the church.
#[derive(Debug, Clone, PartialEq)]
pub struct Ministry {
    /// Database id of the ministry.
    pub id: i32,
    /// Unique display name.
    pub name: String,
    /// Leader running the ministry, if assigned.
    pub leader_id: Option<i32>,
    /// When the ministry was created.
    pub created_at: DateTime<Utc>,
}

impl Ministry {
    /// Converts the ministry domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `MinistryDto` - The converted ministry DTO
    pub fn into_dto(self) -> MinistryDto {
        MinistryDto {
            id: self.id,
            name: self.name,
            leader_id: self.leader_id,
        }
    }

    /// Converts an entity model to a ministry domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ministry` - The converted ministry domain model
    pub fn from_entity(entity: entity::ministry::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            leader_id: entity.leader_id,
            created_at: entity.created_at,
        }
    }
}

/// A headcount tally for one ministry on one service day.
#[derive(Debug, Clone, PartialEq)]
pub struct MinistryAttendance {
    /// Database id of the tally.
    pub id: i32,
    /// Ministry the tally belongs to.
    pub ministry_id: i32,
    /// Service day the tally was taken.
    pub service_date: NaiveDate,
    /// Number of ministry members present.
    pub headcount: i32,
    /// Leader who captured the tally.
    pub recorded_by: i32,
    /// When the tally was created.
    pub created_at: DateTime<Utc>,
}

impl MinistryAttendance {
    /// Converts the tally domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `MinistryAttendanceDto` - The converted tally DTO
    pub fn into_dto(self) -> MinistryAttendanceDto {
        MinistryAttendanceDto {
            id: self.id,
            ministry_id: self.ministry_id,
            service_date: self.service_date,
            headcount: self.headcount,
            recorded_by: self.recorded_by,
        }
    }

    /// Converts an entity model to a tally domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `MinistryAttendance` - The converted tally domain model
    pub fn from_entity(entity: entity::ministry_attendance::Model) -> Self {
        Self {
            id: entity.id,
            ministry_id: entity.ministry_id,
            service_date: entity.service_date,
            headcount: entity.headcount,
            recorded_by: entity.recorded_by,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a ministry.
#[derive(Debug, Clone)]
pub struct CreateMinistryParam {
    /// Unique display name.
    pub name: String,
    /// Leader to assign, validated to hold the Ministry_Leader role.
    pub leader_id: Option<i32>,
}

/// Parameters for recording a ministry headcount.
#[derive(Debug, Clone)]
pub struct RecordMinistryAttendanceParam {
    /// Ministry the tally is for.
    pub ministry_id: i32,
    /// Service day the tally was taken.
    pub service_date: NaiveDate,
    /// Number of ministry members present; must not be negative.
    pub headcount: i32,
    /// Leader capturing the tally (always the authenticated user).
    pub recorded_by: i32,
}
