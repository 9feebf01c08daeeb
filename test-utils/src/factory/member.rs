//! Member factory for creating test member entities.
//!
//! This module provides factory methods for creating member entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use entity::member::MemberState;

/// Factory for creating test members with customizable fields.
///
/// Provides a builder pattern for creating member entities with default values
/// that can be overridden as needed for specific test scenarios. Members always
/// belong to an area, so the area ID is required up front.
///
/// # Example
///
/// ```rust,ignore
/// use entity::member::MemberState;
/// use test_utils::factory::member::MemberFactory;
///
/// let member = MemberFactory::new(&db, area.id)
///     .first_name("Ama")
///     .leader_id(leader.id)
///     .state(MemberState::Goat)
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    phone: Option<String>,
    residence: Option<String>,
    area_id: i32,
    leader_id: Option<i32>,
    state: MemberState,
    joined_on: NaiveDate,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Member"`
    /// - last_name: `"{id}"` where id is auto-incremented
    /// - phone: `"+23320000{id}"`
    /// - state: `MemberState::Sheep`
    /// - joined_on: `2025-01-05`
    /// - leader_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `area_id` - ID of the area this member belongs to
    ///
    /// # Returns
    /// - `MemberFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, area_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Member".to_string(),
            last_name: format!("{}", id),
            phone: Some(format!("+23320000{}", id)),
            residence: None,
            area_id,
            leader_id: None,
            state: MemberState::Sheep,
            joined_on: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
        }
    }

    /// Sets the member's first name.
    ///
    /// # Arguments
    /// - `first_name` - Given name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the member's last name.
    ///
    /// # Arguments
    /// - `last_name` - Family name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the member's phone number.
    ///
    /// # Arguments
    /// - `phone` - Phone number in any display format
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the member's residence description.
    ///
    /// # Arguments
    /// - `residence` - Free-form home location text
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn residence(mut self, residence: impl Into<String>) -> Self {
        self.residence = Some(residence.into());
        self
    }

    /// Sets the Bacenta leader shepherding this member.
    ///
    /// # Arguments
    /// - `leader_id` - ID of an existing user row
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn leader_id(mut self, leader_id: i32) -> Self {
        self.leader_id = Some(leader_id);
        self
    }

    /// Sets the member's engagement state.
    ///
    /// # Arguments
    /// - `state` - Sheep, Goat or Deer
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn state(mut self, state: MemberState) -> Self {
        self.state = state;
        self
    }

    /// Sets the date the member joined.
    ///
    /// # Arguments
    /// - `joined_on` - Date of first attendance
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn joined_on(mut self, joined_on: NaiveDate) -> Self {
        self.joined_on = joined_on;
        self
    }

    /// Builds and inserts the member entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member::Model)` - Created member entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            id: ActiveValue::NotSet,
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            phone: ActiveValue::Set(self.phone),
            residence: ActiveValue::Set(self.residence),
            area_id: ActiveValue::Set(self.area_id),
            leader_id: ActiveValue::Set(self.leader_id),
            state: ActiveValue::Set(self.state),
            photo_url: ActiveValue::Set(None),
            joined_on: ActiveValue::Set(self.joined_on),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member with default values in the specified area.
///
/// Shorthand for `MemberFactory::new(db, area_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `area_id` - ID of the area this member belongs to
///
/// # Returns
/// - `Ok(entity::member::Model)` - Created member entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_member(
    db: &DatabaseConnection,
    area_id: i32,
) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db, area_id).build().await
}

/// Creates a member shepherded by a specific leader.
///
/// Shorthand for `MemberFactory::new(db, area_id).leader_id(leader_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `area_id` - ID of the area this member belongs to
/// - `leader_id` - ID of the user shepherding this member
///
/// # Returns
/// - `Ok(entity::member::Model)` - Created member entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_member_with_leader(
    db: &DatabaseConnection,
    area_id: i32,
    leader_id: i32,
) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db, area_id).leader_id(leader_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory;

    #[tokio::test]
    async fn creates_member_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_people_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let region = factory::region::create_region(db).await?;
        let area = factory::area::create_area(db, region.id).await?;
        let member = create_member(db, area.id).await?;

        assert_eq!(member.area_id, area.id);
        assert_eq!(member.state, MemberState::Sheep);
        assert!(member.leader_id.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_member_with_dependencies() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_people_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (leader, _region, area, member) =
            factory::helpers::create_member_with_dependencies(db).await?;

        assert_eq!(member.area_id, area.id);
        assert_eq!(member.leader_id, Some(leader.id));

        Ok(())
    }
}
