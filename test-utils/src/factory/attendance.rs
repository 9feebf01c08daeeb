//! Attendance factory for creating Sunday attendance rows.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test attendance rows with customizable fields.
///
/// Provides a builder pattern for creating attendance entities. The member and
/// recording leader are required up front; the service date defaults to a fixed
/// Sunday so tests stay deterministic.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::attendance::AttendanceFactory;
///
/// let row = AttendanceFactory::new(&db, member.id, leader.id)
///     .service_date(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap())
///     .present(false)
///     .build()
///     .await?;
/// ```
pub struct AttendanceFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: i32,
    service_date: NaiveDate,
    present: bool,
    recorded_by: i32,
}

impl<'a> AttendanceFactory<'a> {
    /// Creates a new AttendanceFactory with default values.
    ///
    /// Defaults:
    /// - service_date: `2025-03-02` (a Sunday)
    /// - present: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `member_id` - ID of the member the row belongs to
    /// - `recorded_by` - ID of the user capturing the attendance
    ///
    /// # Returns
    /// - `AttendanceFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, member_id: i32, recorded_by: i32) -> Self {
        Self {
            db,
            member_id,
            service_date: NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
            present: true,
            recorded_by,
        }
    }

    /// Sets the Sunday the attendance was taken for.
    ///
    /// # Arguments
    /// - `service_date` - Date of the service
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn service_date(mut self, service_date: NaiveDate) -> Self {
        self.service_date = service_date;
        self
    }

    /// Sets whether the member was present.
    ///
    /// # Arguments
    /// - `present` - `false` to record an absence
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn present(mut self, present: bool) -> Self {
        self.present = present;
        self
    }

    /// Builds and inserts the attendance entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::attendance::Model)` - Created attendance entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::attendance::Model, DbErr> {
        entity::attendance::ActiveModel {
            id: ActiveValue::NotSet,
            member_id: ActiveValue::Set(self.member_id),
            service_date: ActiveValue::Set(self.service_date),
            present: ActiveValue::Set(self.present),
            recorded_by: ActiveValue::Set(self.recorded_by),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an attendance row with default values.
///
/// Shorthand for `AttendanceFactory::new(db, member_id, recorded_by).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `member_id` - ID of the member the row belongs to
/// - `recorded_by` - ID of the user capturing the attendance
///
/// # Returns
/// - `Ok(entity::attendance::Model)` - Created attendance entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_attendance(
    db: &DatabaseConnection,
    member_id: i32,
    recorded_by: i32,
) -> Result<entity::attendance::Model, DbErr> {
    AttendanceFactory::new(db, member_id, recorded_by).build().await
}
