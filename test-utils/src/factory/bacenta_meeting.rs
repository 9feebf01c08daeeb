//! Bacenta meeting factory for creating midweek meeting reports.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test Bacenta meetings with customizable fields.
///
/// Provides a builder pattern for creating meeting entities. The reporting
/// leader is required up front; the meeting date defaults to a fixed weekday
/// so tests stay deterministic.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::bacenta_meeting::BacentaMeetingFactory;
///
/// let meeting = BacentaMeetingFactory::new(&db, leader.id)
///     .meeting_date(NaiveDate::from_ymd_opt(2025, 3, 12).unwrap())
///     .venue("Sister Abena's compound")
///     .build()
///     .await?;
/// ```
pub struct BacentaMeetingFactory<'a> {
    db: &'a DatabaseConnection,
    leader_id: i32,
    meeting_date: NaiveDate,
    venue: Option<String>,
    topic: Option<String>,
}

impl<'a> BacentaMeetingFactory<'a> {
    /// Creates a new BacentaMeetingFactory with default values.
    ///
    /// Defaults:
    /// - meeting_date: `2025-03-05` (a Wednesday)
    /// - venue: `None`
    /// - topic: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `leader_id` - ID of the leader who held the meeting
    ///
    /// # Returns
    /// - `BacentaMeetingFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, leader_id: i32) -> Self {
        Self {
            db,
            leader_id,
            meeting_date: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
            venue: None,
            topic: None,
        }
    }

    /// Sets the date the meeting was held.
    ///
    /// # Arguments
    /// - `meeting_date` - Date of the meeting
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn meeting_date(mut self, meeting_date: NaiveDate) -> Self {
        self.meeting_date = meeting_date;
        self
    }

    /// Sets the meeting venue.
    ///
    /// # Arguments
    /// - `venue` - Free-form venue description
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = Some(venue.into());
        self
    }

    /// Sets the meeting topic.
    ///
    /// # Arguments
    /// - `topic` - Free-form topic text
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    /// Builds and inserts the meeting entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::bacenta_meeting::Model)` - Created meeting entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::bacenta_meeting::Model, DbErr> {
        entity::bacenta_meeting::ActiveModel {
            id: ActiveValue::NotSet,
            leader_id: ActiveValue::Set(self.leader_id),
            meeting_date: ActiveValue::Set(self.meeting_date),
            venue: ActiveValue::Set(self.venue),
            topic: ActiveValue::Set(self.topic),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a Bacenta meeting with default values for the specified leader.
///
/// Shorthand for `BacentaMeetingFactory::new(db, leader_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `leader_id` - ID of the leader who held the meeting
///
/// # Returns
/// - `Ok(entity::bacenta_meeting::Model)` - Created meeting entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_meeting(
    db: &DatabaseConnection,
    leader_id: i32,
) -> Result<entity::bacenta_meeting::Model, DbErr> {
    BacentaMeetingFactory::new(db, leader_id).build().await
}
