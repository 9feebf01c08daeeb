//! Area factory for creating test area entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test areas with customizable fields.
///
/// Provides a builder pattern for creating area entities with default values
/// that can be overridden as needed for specific test scenarios. Areas always
/// belong to a region, so the region ID is required up front.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::area::AreaFactory;
///
/// let area = AreaFactory::new(&db, region.id)
///     .name("Madina")
///     .overseer_id(pastor.id)
///     .build()
///     .await?;
/// ```
pub struct AreaFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    region_id: i32,
    overseer_id: Option<i32>,
}

impl<'a> AreaFactory<'a> {
    /// Creates a new AreaFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Area {id}"` where id is auto-incremented
    /// - overseer_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `region_id` - ID of the region this area belongs to
    ///
    /// # Returns
    /// - `AreaFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, region_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Area {}", id),
            region_id,
            overseer_id: None,
        }
    }

    /// Sets the area name.
    ///
    /// # Arguments
    /// - `name` - Display name for the area
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the pastor overseeing the area.
    ///
    /// # Arguments
    /// - `overseer_id` - ID of an existing user row
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn overseer_id(mut self, overseer_id: i32) -> Self {
        self.overseer_id = Some(overseer_id);
        self
    }

    /// Builds and inserts the area entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::area::Model)` - Created area entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::area::Model, DbErr> {
        entity::area::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            region_id: ActiveValue::Set(self.region_id),
            overseer_id: ActiveValue::Set(self.overseer_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an area with default values in the specified region.
///
/// Shorthand for `AreaFactory::new(db, region_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `region_id` - ID of the region this area belongs to
///
/// # Returns
/// - `Ok(entity::area::Model)` - Created area entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_area(
    db: &DatabaseConnection,
    region_id: i32,
) -> Result<entity::area::Model, DbErr> {
    AreaFactory::new(db, region_id).build().await
}
