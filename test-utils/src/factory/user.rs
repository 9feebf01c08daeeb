//! User factory for creating test leader accounts.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use entity::user::Role;

/// Placeholder password hash for factory-created accounts.
///
/// Tests that exercise credential verification should insert their own hash;
/// everything else only needs the column populated.
pub const DUMMY_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$dGVzdHNhbHQ$dGVzdGhhc2g";

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating leader accounts with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use entity::user::Role;
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("kwame")
///     .role(Role::Governor)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    password_hash: String,
    full_name: String,
    phone: Option<String>,
    role: Role,
    area_id: Option<i32>,
    active: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"` where id is auto-incremented
    /// - full_name: `"User {id}"`
    /// - role: `Role::BacentaLeader`
    /// - area_id: `None`
    /// - active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            password_hash: DUMMY_PASSWORD_HASH.to_string(),
            full_name: format!("User {}", id),
            phone: None,
            role: Role::BacentaLeader,
            area_id: None,
            active: true,
        }
    }

    /// Sets the login username.
    ///
    /// # Arguments
    /// - `username` - Unique login name for the account
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the stored password hash.
    ///
    /// # Arguments
    /// - `password_hash` - PHC-format hash string to store verbatim
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Sets the display name.
    ///
    /// # Arguments
    /// - `full_name` - Full display name for the account
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    /// Sets the contact phone number.
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

    /// Sets the supervisory role.
    ///
    /// # Arguments
    /// - `role` - Role the account holds in the hierarchy
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Sets the area the leader is attached to.
    ///
    /// # Arguments
    /// - `area_id` - ID of an existing area row
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn area_id(mut self, area_id: i32) -> Self {
        self.area_id = Some(area_id);
        self
    }

    /// Sets whether the account can sign in.
    ///
    /// # Arguments
    /// - `active` - `false` to deactivate the account
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(self.password_hash),
            full_name: ActiveValue::Set(self.full_name),
            phone: ActiveValue::Set(self.phone),
            role: ActiveValue::Set(self.role),
            area_id: ActiveValue::Set(self.area_id),
            photo_url: ActiveValue::Set(None),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let user = create_user(&db).await?;
/// ```
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user holding a specific role.
///
/// Shorthand for `UserFactory::new(db).role(role).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `role` - Role the account should hold
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let bishop = create_user_with_role(&db, Role::Bishop).await?;
/// ```
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    role: Role,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(role).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_people_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(!user.username.is_empty());
        assert!(!user.full_name.is_empty());
        assert_eq!(user.role, Role::BacentaLeader);
        assert!(user.active);

        Ok(())
    }

    #[tokio::test]
    async fn creates_user_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_people_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = UserFactory::new(db)
            .username("kwame")
            .full_name("Kwame Mensah")
            .role(Role::Governor)
            .active(false)
            .build()
            .await?;

        assert_eq!(user.username, "kwame");
        assert_eq!(user.full_name, "Kwame Mensah");
        assert_eq!(user.role, Role::Governor);
        assert!(!user.active);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_people_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user1 = create_user(db).await?;
        let user2 = create_user(db).await?;

        assert_ne!(user1.username, user2.username);
        assert_ne!(user1.id, user2.id);

        Ok(())
    }
}
