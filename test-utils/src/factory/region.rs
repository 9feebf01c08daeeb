//! Region factory for creating test region entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test regions with customizable fields.
///
/// Provides a builder pattern for creating region entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::region::RegionFactory;
///
/// let region = RegionFactory::new(&db)
///     .name("Accra East")
///     .governor_id(governor.id)
///     .build()
///     .await?;
/// ```
pub struct RegionFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    governor_id: Option<i32>,
}

impl<'a> RegionFactory<'a> {
    /// Creates a new RegionFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Region {id}"` where id is auto-incremented
    /// - governor_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `RegionFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Region {}", id),
            governor_id: None,
        }
    }

    /// Sets the region name.
    ///
    /// # Arguments
    /// - `name` - Display name for the region
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the governor overseeing the region.
    ///
    /// # Arguments
    /// - `governor_id` - ID of an existing user row
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn governor_id(mut self, governor_id: i32) -> Self {
        self.governor_id = Some(governor_id);
        self
    }

    /// Builds and inserts the region entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::region::Model)` - Created region entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::region::Model, DbErr> {
        entity::region::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            governor_id: ActiveValue::Set(self.governor_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a region with default values.
///
/// Shorthand for `RegionFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::region::Model)` - Created region entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_region(db: &DatabaseConnection) -> Result<entity::region::Model, DbErr> {
    RegionFactory::new(db).build().await
}
