//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing leader accounts in the
//! database. It handles account creation, credential lookups, scoped listing,
//! updates and photo storage with proper conversion between entity models and
//! domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::data::scope::user_condition;
use crate::model::scope::Scope;
use crate::model::user::{CreateUserParam, GetAllUsersParam, UpdateUserParam, User};

/// Repository providing database operations for leader accounts.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying leader records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a leader account from parameters and a precomputed password hash.
    ///
    /// Hashing happens in the service layer; the repository never sees the
    /// plaintext password.
    ///
    /// # Arguments
    /// - `param` - Account fields (the `password` field is ignored here)
    /// - `password_hash` - Argon2id PHC string to store
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: CreateUserParam,
        password_hash: String,
    ) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            password_hash: ActiveValue::Set(password_hash),
            full_name: ActiveValue::Set(param.full_name),
            phone: ActiveValue::Set(param.phone),
            role: ActiveValue::Set(param.role),
            area_id: ActiveValue::Set(param.area_id),
            photo_url: ActiveValue::Set(None),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a leader by id.
    ///
    /// # Arguments
    /// - `id` - Database id of the account
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Account found
    /// - `Ok(None)` - No account with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a leader's full entity row by id.
    ///
    /// The auth guard and scope resolver work with the raw entity; everything
    /// else should prefer [`Self::find_by_id`].
    ///
    /// # Arguments
    /// - `id` - Database id of the account
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Account row found
    /// - `Ok(None)` - No account with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_entity_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a leader's full entity row by username, including the password hash.
    ///
    /// Only the login flow should use this; everything else works with the
    /// credential-free domain model.
    ///
    /// # Arguments
    /// - `username` - Login name to look up
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Account row found
    /// - `Ok(None)` - No account with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_entity_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Checks whether a username is already taken.
    ///
    /// # Arguments
    /// - `username` - Login name to check
    ///
    /// # Returns
    /// - `Ok(true)` - An account with this username exists
    /// - `Ok(false)` - Username is free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all leaders visible in a scope, with pagination.
    ///
    /// Ordered alphabetically by full name. A Bishop's scope covers everyone;
    /// a Governor's scope covers the leaders attached to their region's areas.
    ///
    /// # Arguments
    /// - `param` - Page number (zero-indexed) and page size
    /// - `scope` - Caller's visibility scope
    ///
    /// # Returns
    /// - `Ok((users, total))` - Page of accounts and the total count in scope
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        param: GetAllUsersParam,
        scope: &Scope,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .filter(user_condition(scope))
            .order_by_asc(entity::user::Column::FullName)
            .paginate(self.db, param.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(param.page).await?;
        let users = entities.into_iter().map(User::from_entity).collect();

        Ok((users, total))
    }

    /// Gets every active leader visible in a scope.
    ///
    /// Used to fan out broadcast notifications.
    ///
    /// # Arguments
    /// - `scope` - Sender's visibility scope
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Active accounts in scope (possibly empty)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_active_in_scope(&self, scope: &Scope) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(user_condition(scope))
            .filter(entity::user::Column::Active.eq(true))
            .order_by_asc(entity::user::Column::FullName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Updates a leader account.
    ///
    /// `None` fields in the parameter are left unchanged; the double-Option
    /// fields distinguish "leave alone" from "clear".
    ///
    /// # Arguments
    /// - `id` - Database id of the account
    /// - `param` - Fields to change
    ///
    /// # Returns
    /// - `Ok(User)` - The updated account
    /// - `Err(DbErr)` - Account not found or database error during update
    pub async fn update(&self, id: i32, param: UpdateUserParam) -> Result<User, DbErr> {
        let entity = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User with id {id} not found"
            )))?;

        let mut active_model: entity::user::ActiveModel = entity.into();
        if let Some(full_name) = param.full_name {
            active_model.full_name = ActiveValue::Set(full_name);
        }
        if let Some(phone) = param.phone {
            active_model.phone = ActiveValue::Set(phone);
        }
        if let Some(role) = param.role {
            active_model.role = ActiveValue::Set(role);
        }
        if let Some(area_id) = param.area_id {
            active_model.area_id = ActiveValue::Set(area_id);
        }
        if let Some(active) = param.active {
            active_model.active = ActiveValue::Set(active);
        }

        let entity = active_model.update(self.db).await?;

        Ok(User::from_entity(entity))
    }

    /// Replaces a leader's stored password hash.
    ///
    /// # Arguments
    /// - `id` - Database id of the account
    /// - `password_hash` - New Argon2id PHC string
    ///
    /// # Returns
    /// - `Ok(())` - Hash replaced (no-op if the account does not exist)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_password(&self, id: i32, password_hash: String) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Stores the URL of a leader's uploaded photo.
    ///
    /// # Arguments
    /// - `id` - Database id of the account
    /// - `photo_url` - Public URL of the stored file
    ///
    /// # Returns
    /// - `Ok(())` - URL stored (no-op if the account does not exist)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_photo(&self, id: i32, photo_url: String) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::PhotoUrl,
                sea_orm::sea_query::Expr::value(Some(photo_url)),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Checks whether any Bishop account exists.
    ///
    /// Used during startup to decide whether the bootstrap account should be
    /// created.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one Bishop exists
    /// - `Ok(false)` - No Bishop exists (first-time setup scenario)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn bishop_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(entity::user::Role::Bishop))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
