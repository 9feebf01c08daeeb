//! Ministry factory for creating test ministry entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test ministries with customizable fields.
///
/// Provides a builder pattern for creating ministry entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::ministry::MinistryFactory;
///
/// let ministry = MinistryFactory::new(&db)
///     .name("Choir")
///     .leader_id(leader.id)
///     .build()
///     .await?;
/// ```
pub struct MinistryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    leader_id: Option<i32>,
}

impl<'a> MinistryFactory<'a> {
    /// Creates a new MinistryFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Ministry {id}"` where id is auto-incremented
    /// - leader_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `MinistryFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Ministry {}", id),
            leader_id: None,
        }
    }

    /// Sets the ministry name.
    ///
    /// # Arguments
    /// - `name` - Display name for the ministry
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the leader running the ministry.
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

    /// Builds and inserts the ministry entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::ministry::Model)` - Created ministry entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::ministry::Model, DbErr> {
        entity::ministry::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            leader_id: ActiveValue::Set(self.leader_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a ministry with default values.
///
/// Shorthand for `MinistryFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::ministry::Model)` - Created ministry entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_ministry(db: &DatabaseConnection) -> Result<entity::ministry::Model, DbErr> {
    MinistryFactory::new(db).build().await
}
