//! Shepherding call log domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use entity::call_log::CallOutcome;

use crate::dto::call_log::CallLogDto;

/// A logged shepherding call to a member.
#[derive(Debug, Clone, PartialEq)]
pub struct CallLog {
    /// Database id of the entry.
    pub id: i32,
    /// Member who was called.
    pub member_id: i32,
    /// Leader who made the call.
    pub caller_id: i32,
    /// How the call went.
    pub outcome: CallOutcome,
    /// Free-form notes, if any.
    pub notes: Option<String>,
    /// Date the call was made.
    pub called_on: NaiveDate,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
}

impl CallLog {
    /// Converts the call log domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `CallLogDto` - The converted call log DTO
    pub fn into_dto(self) -> CallLogDto {
        CallLogDto {
            id: self.id,
            member_id: self.member_id,
            caller_id: self.caller_id,
            outcome: outcome_to_string(&self.outcome),
            notes: self.notes,
            called_on: self.called_on,
        }
    }

    /// Converts an entity model to a call log domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `CallLog` - The converted call log domain model
    pub fn from_entity(entity: entity::call_log::Model) -> Self {
        Self {
            id: entity.id,
            member_id: entity.member_id,
            caller_id: entity.caller_id,
            outcome: entity.outcome,
            notes: entity.notes,
            called_on: entity.called_on,
            created_at: entity.created_at,
        }
    }
}

/// Wire name of a call outcome, matching the database string values.
pub fn outcome_to_string(outcome: &CallOutcome) -> String {
    match outcome {
        CallOutcome::Answered => "Answered",
        CallOutcome::NoAnswer => "No_Answer",
        CallOutcome::SwitchedOff => "Switched_Off",
        CallOutcome::WrongNumber => "Wrong_Number",
    }
    .to_string()
}

/// Parses a wire call outcome back into the enum.
///
/// # Returns
/// - `Some(CallOutcome)` - Recognized outcome name
/// - `None` - Unknown outcome string
pub fn outcome_from_string(value: &str) -> Option<CallOutcome> {
    match value {
        "Answered" => Some(CallOutcome::Answered),
        "No_Answer" => Some(CallOutcome::NoAnswer),
        "Switched_Off" => Some(CallOutcome::SwitchedOff),
        "Wrong_Number" => Some(CallOutcome::WrongNumber),
        _ => None,
    }
}

/// Parameters for logging a call.
#[derive(Debug, Clone)]
pub struct LogCallParam {
    /// Member who was called.
    pub member_id: i32,
    /// Leader who made the call (always the authenticated user).
    pub caller_id: i32,
    /// How the call went.
    pub outcome: CallOutcome,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Date of the call; defaults to today when absent.
    pub called_on: NaiveDate,
}
