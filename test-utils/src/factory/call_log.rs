//! Call log factory for creating shepherding call entries.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use entity::call_log::CallOutcome;

/// Factory for creating test call log entries with customizable fields.
///
/// Provides a builder pattern for creating call log entities. The member
/// called and the calling leader are required up front.
///
/// # Example
///
/// ```rust,ignore
/// use entity::call_log::CallOutcome;
/// use test_utils::factory::call_log::CallLogFactory;
///
/// let entry = CallLogFactory::new(&db, member.id, leader.id)
///     .outcome(CallOutcome::NoAnswer)
///     .notes("Try again Saturday")
///     .build()
///     .await?;
/// ```
pub struct CallLogFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: i32,
    caller_id: i32,
    outcome: CallOutcome,
    notes: Option<String>,
    called_on: NaiveDate,
}

impl<'a> CallLogFactory<'a> {
    /// Creates a new CallLogFactory with default values.
    ///
    /// Defaults:
    /// - outcome: `CallOutcome::Answered`
    /// - notes: `None`
    /// - called_on: `2025-03-04`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `member_id` - ID of the member who was called
    /// - `caller_id` - ID of the user who made the call
    ///
    /// # Returns
    /// - `CallLogFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, member_id: i32, caller_id: i32) -> Self {
        Self {
            db,
            member_id,
            caller_id,
            outcome: CallOutcome::Answered,
            notes: None,
            called_on: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
        }
    }

    /// Sets the outcome of the call.
    ///
    /// # Arguments
    /// - `outcome` - How the call went
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn outcome(mut self, outcome: CallOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    /// Sets the free-form notes for the call.
    ///
    /// # Arguments
    /// - `notes` - Notes text
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the date the call was made.
    ///
    /// # Arguments
    /// - `called_on` - Date of the call
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn called_on(mut self, called_on: NaiveDate) -> Self {
        self.called_on = called_on;
        self
    }

    /// Builds and inserts the call log entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::call_log::Model)` - Created call log entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::call_log::Model, DbErr> {
        entity::call_log::ActiveModel {
            id: ActiveValue::NotSet,
            member_id: ActiveValue::Set(self.member_id),
            caller_id: ActiveValue::Set(self.caller_id),
            outcome: ActiveValue::Set(self.outcome),
            notes: ActiveValue::Set(self.notes),
            called_on: ActiveValue::Set(self.called_on),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a call log entry with default values.
///
/// Shorthand for `CallLogFactory::new(db, member_id, caller_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `member_id` - ID of the member who was called
/// - `caller_id` - ID of the user who made the call
///
/// # Returns
/// - `Ok(entity::call_log::Model)` - Created call log entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_call_log(
    db: &DatabaseConnection,
    member_id: i32,
    caller_id: i32,
) -> Result<entity::call_log::Model, DbErr> {
    CallLogFactory::new(db, member_id, caller_id).build().await
}
