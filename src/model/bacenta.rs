//! Bacenta meeting domain models and parameters.
//!
//! A Bacenta is a small house-church unit; its leader reports each midweek
//! meeting together with who attended and what was given.

use chrono::{DateTime, NaiveDate, Utc};

use crate::dto::bacenta::{
    BacentaAttendanceDto, BacentaMeetingDetailDto, BacentaMeetingDto, BacentaOfferingDto,
};

/// A reported Bacenta meeting.
#[derive(Debug, Clone, PartialEq)]
pub struct BacentaMeeting {
    /// Database id of the meeting.
    pub id: i32,
    /// Leader who held the meeting.
    pub leader_id: i32,
    /// Date the meeting was held.
    pub meeting_date: NaiveDate,
    /// Free-form venue description, if recorded.
    pub venue: Option<String>,
    /// Topic discussed, if recorded.
    pub topic: Option<String>,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
}

impl BacentaMeeting {
    /// Converts the meeting domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `BacentaMeetingDto` - The converted meeting DTO
    pub fn into_dto(self) -> BacentaMeetingDto {
        BacentaMeetingDto {
            id: self.id,
            leader_id: self.leader_id,
            meeting_date: self.meeting_date,
            venue: self.venue,
            topic: self.topic,
        }
    }

    /// Converts an entity model to a meeting domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `BacentaMeeting` - The converted meeting domain model
    pub fn from_entity(entity: entity::bacenta_meeting::Model) -> Self {
        Self {
            id: entity.id,
            leader_id: entity.leader_id,
            meeting_date: entity.meeting_date,
            venue: entity.venue,
            topic: entity.topic,
            created_at: entity.created_at,
        }
    }
}

/// One member's presence at a Bacenta meeting.
#[derive(Debug, Clone, PartialEq)]
pub struct BacentaAttendance {
    /// Database id of the row.
    pub id: i32,
    /// Meeting the row belongs to.
    pub meeting_id: i32,
    /// Member who attended.
    pub member_id: i32,
    /// Whether this was the member's first ever meeting.
    pub first_timer: bool,
}

impl BacentaAttendance {
    /// Converts the attendance domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `BacentaAttendanceDto` - The converted attendance DTO
    pub fn into_dto(self) -> BacentaAttendanceDto {
        BacentaAttendanceDto {
            id: self.id,
            member_id: self.member_id,
            first_timer: self.first_timer,
        }
    }

    /// Converts an entity model to an attendance domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `BacentaAttendance` - The converted attendance domain model
    pub fn from_entity(entity: entity::bacenta_attendance::Model) -> Self {
        Self {
            id: entity.id,
            meeting_id: entity.meeting_id,
            member_id: entity.member_id,
            first_timer: entity.first_timer,
        }
    }
}

/// One offering given at a Bacenta meeting.
#[derive(Debug, Clone, PartialEq)]
pub struct BacentaOffering {
    /// Database id of the row.
    pub id: i32,
    /// Meeting the offering was given at.
    pub meeting_id: i32,
    /// Amount in minor currency units (hundredths).
    pub amount_minor: i64,
    /// Free-form note, if any.
    pub note: Option<String>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
}

impl BacentaOffering {
    /// Converts the offering domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `BacentaOfferingDto` - The converted offering DTO
    pub fn into_dto(self) -> BacentaOfferingDto {
        BacentaOfferingDto {
            id: self.id,
            amount_minor: self.amount_minor,
            note: self.note,
        }
    }

    /// Converts an entity model to an offering domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `BacentaOffering` - The converted offering domain model
    pub fn from_entity(entity: entity::bacenta_offering::Model) -> Self {
        Self {
            id: entity.id,
            meeting_id: entity.meeting_id,
            amount_minor: entity.amount_minor,
            note: entity.note,
            created_at: entity.created_at,
        }
    }
}

/// A meeting together with its attendance list and offerings.
#[derive(Debug, Clone, PartialEq)]
pub struct BacentaMeetingDetail {
    /// The meeting itself.
    pub meeting: BacentaMeeting,
    /// Everyone recorded present.
    pub attendance: Vec<BacentaAttendance>,
    /// Everything given.
    pub offerings: Vec<BacentaOffering>,
}

impl BacentaMeetingDetail {
    /// Converts the detail domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `BacentaMeetingDetailDto` - The converted detail DTO
    pub fn into_dto(self) -> BacentaMeetingDetailDto {
        BacentaMeetingDetailDto {
            meeting: self.meeting.into_dto(),
            attendance: self.attendance.into_iter().map(|a| a.into_dto()).collect(),
            offerings: self.offerings.into_iter().map(|o| o.into_dto()).collect(),
        }
    }
}

/// Parameters for reporting a meeting.
#[derive(Debug, Clone)]
pub struct CreateMeetingParam {
    /// Leader who held the meeting (always the authenticated user).
    pub leader_id: i32,
    /// Date the meeting was held.
    pub meeting_date: NaiveDate,
    /// Free-form venue description.
    pub venue: Option<String>,
    /// Topic discussed.
    pub topic: Option<String>,
}

/// Parameters for adding one attendee to a meeting.
#[derive(Debug, Clone)]
pub struct AddBacentaAttendanceParam {
    /// Meeting to add to.
    pub meeting_id: i32,
    /// Member who attended.
    pub member_id: i32,
    /// Whether this was the member's first ever meeting.
    pub first_timer: bool,
}

/// Parameters for adding one offering to a meeting.
#[derive(Debug, Clone)]
pub struct AddOfferingParam {
    /// Meeting the offering was given at.
    pub meeting_id: i32,
    /// Amount in minor currency units; must be positive.
    pub amount_minor: i64,
    /// Free-form note.
    pub note: Option<String>,
}

/// Date range for meeting list queries. Either bound may be absent.
#[derive(Debug, Clone, Default)]
pub struct MeetingRangeParam {
    /// Earliest meeting date to include.
    pub from: Option<NaiveDate>,
    /// Latest meeting date to include.
    pub to: Option<NaiveDate>,
}
