//! Leader account service for business logic.
//!
//! Creation and updates validate username uniqueness, area existence and role
//! rules before touching the repository; reads apply the caller's visibility
//! scope so an out-of-scope leader behaves exactly like a missing one.

use rand::distr::Alphanumeric;
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::auth::password::hash_password;
use crate::data::{area::AreaRepository, user::UserRepository};
use crate::error::{auth::AuthError, AppError};
use crate::model::scope::Scope;
use crate::model::user::{
    CreateUserParam, GetAllUsersParam, PaginatedUsers, UpdateUserParam, User,
};

use entity::user::Role;

/// Length of generated temporary passwords.
const TEMP_PASSWORD_LENGTH: usize = 12;

/// Whether a leader account is visible inside a scope.
///
/// Area scopes cover leaders attached to those areas; a Bacenta leader's
/// scope covers only their own account.
pub fn user_in_scope(user: &User, scope: &Scope) -> bool {
    match scope {
        Scope::All => true,
        Scope::Areas(ids) => user.area_id.is_some_and(|area_id| ids.contains(&area_id)),
        Scope::Leader(id) => user.id == *id,
        Scope::Nothing => false,
    }
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a leader account.
    ///
    /// Validates username uniqueness and area existence, and enforces the
    /// hierarchy rules: only a Bishop may create Bishop or Governor accounts,
    /// and a Governor may only attach new leaders to areas inside their own
    /// scope. When no password is supplied a temporary one is generated and
    /// returned exactly once.
    ///
    /// # Arguments
    /// - `param` - Account fields
    /// - `creator` - The authenticated creator's row
    /// - `creator_scope` - The creator's visibility scope
    ///
    /// # Returns
    /// - `Ok((User, Option<String>))` - The account and the generated password, if any
    /// - `Err(AppError::BadRequest)` - Username taken or unknown area
    /// - `Err(AuthError::AccessDenied)` - Hierarchy rule violated
    pub async fn create(
        &self,
        param: CreateUserParam,
        creator: &entity::user::Model,
        creator_scope: &Scope,
    ) -> Result<(User, Option<String>), AppError> {
        let user_repo = UserRepository::new(self.db);
        let area_repo = AreaRepository::new(self.db);

        if user_repo.username_exists(&param.username).await? {
            return Err(AppError::BadRequest(format!(
                "Username '{}' is already taken",
                param.username
            )));
        }

        if matches!(param.role, Role::Bishop | Role::Governor) && creator.role != Role::Bishop {
            return Err(AuthError::AccessDenied(
                creator.id,
                format!("attempted to create a {:?} account", param.role),
            )
            .into());
        }

        if let Some(area_id) = param.area_id {
            if area_repo.get_by_id(area_id).await?.is_none() {
                return Err(AppError::BadRequest(format!("Area {area_id} does not exist")));
            }

            if !creator_scope.includes_area(area_id) && !creator_scope.is_all() {
                return Err(AuthError::AccessDenied(
                    creator.id,
                    format!("attempted to create a leader in out-of-scope area {area_id}"),
                )
                .into());
            }
        }

        let (plaintext, generated) = match param.password.clone() {
            Some(password) => (password, None),
            None => {
                let generated = generate_temporary_password();
                (generated.clone(), Some(generated))
            }
        };

        let hash = hash_password(&plaintext)?;
        let user = user_repo.create(param, hash).await?;

        tracing::info!("User {} created leader account {}", creator.id, user.id);

        Ok((user, generated))
    }

    /// Gets the leaders visible in a scope, with pagination.
    pub async fn get_all(
        &self,
        param: GetAllUsersParam,
        scope: &Scope,
    ) -> Result<PaginatedUsers, AppError> {
        let user_repo = UserRepository::new(self.db);

        let per_page = param.per_page;
        let page = param.page;
        let (users, total) = user_repo.get_all_paginated(param, scope).await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Gets one leader if the scope covers them.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Leader found and visible
    /// - `Ok(None)` - No such leader, or outside the scope
    pub async fn get_by_id(&self, id: i32, scope: &Scope) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo.find_by_id(id).await?;

        Ok(user.filter(|u| user_in_scope(u, scope)))
    }

    /// Updates a leader account.
    ///
    /// The target must be inside the caller's scope; role and area changes are
    /// validated the same way as at creation.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated account
    /// - `Err(AppError::NotFound)` - No such leader, or outside the scope
    /// - `Err(AppError::BadRequest)` - Unknown area
    /// - `Err(AuthError::AccessDenied)` - Hierarchy rule violated
    pub async fn update(
        &self,
        id: i32,
        param: UpdateUserParam,
        caller: &entity::user::Model,
        caller_scope: &Scope,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        let area_repo = AreaRepository::new(self.db);

        let existing = self
            .get_by_id(id, caller_scope)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))?;

        if let Some(role) = &param.role {
            let touches_top_role = matches!(role, Role::Bishop | Role::Governor)
                || matches!(existing.role, Role::Bishop | Role::Governor);
            if touches_top_role && caller.role != Role::Bishop {
                return Err(AuthError::AccessDenied(
                    caller.id,
                    format!("attempted to change user {id} to or from a top role"),
                )
                .into());
            }
        }

        if let Some(Some(area_id)) = param.area_id {
            if area_repo.get_by_id(area_id).await?.is_none() {
                return Err(AppError::BadRequest(format!("Area {area_id} does not exist")));
            }

            if !caller_scope.includes_area(area_id) && !caller_scope.is_all() {
                return Err(AuthError::AccessDenied(
                    caller.id,
                    format!("attempted to move user {id} into out-of-scope area {area_id}"),
                )
                .into());
            }
        }

        let user = user_repo.update(id, param).await?;

        Ok(user)
    }

    /// Stores an uploaded photo URL on a scoped leader.
    ///
    /// # Returns
    /// - `Ok(())` - URL stored
    /// - `Err(AppError::NotFound)` - No such leader, or outside the scope
    pub async fn set_photo(&self, id: i32, photo_url: String, scope: &Scope) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        if self.get_by_id(id, scope).await?.is_none() {
            return Err(AppError::NotFound(format!("User {id} not found")));
        }

        user_repo.update_photo(id, photo_url).await?;

        Ok(())
    }
}

/// Generates a random alphanumeric temporary password.
fn generate_temporary_password() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TEMP_PASSWORD_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests that a Governor cannot move a visible leader into an area
    /// outside their own regions.
    ///
    /// Expected: Err(AuthError::AccessDenied) naming the caller
    #[tokio::test]
    async fn rejects_moving_leader_into_out_of_scope_area() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_people_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let governor = factory::user::create_user_with_role(db, Role::Governor).await?;
        let governed_region = factory::region::create_region(db).await?;
        let governed_area = factory::area::create_area(db, governed_region.id).await?;
        let foreign_region = factory::region::create_region(db).await?;
        let foreign_area = factory::area::create_area(db, foreign_region.id).await?;

        let target = factory::user::UserFactory::new(db)
            .role(Role::BacentaLeader)
            .area_id(governed_area.id)
            .build()
            .await?;

        let service = UserService::new(db);
        let result = service
            .update(
                target.id,
                UpdateUserParam {
                    full_name: None,
                    phone: None,
                    role: None,
                    area_id: Some(Some(foreign_area.id)),
                    active: None,
                },
                &governor,
                &Scope::Areas(vec![governed_area.id]),
            )
            .await;

        match result {
            Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
                assert_eq!(user_id, governor.id);
            }
            other => panic!("expected AccessDenied, got {other:?}"),
        }

        Ok(())
    }

    /// Tests that a Governor can still move a leader between two areas they
    /// govern.
    ///
    /// Expected: Ok with the new area on the account
    #[tokio::test]
    async fn allows_moving_leader_between_governed_areas() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_people_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let governor = factory::user::create_user_with_role(db, Role::Governor).await?;
        let region = factory::region::create_region(db).await?;
        let first_area = factory::area::create_area(db, region.id).await?;
        let second_area = factory::area::create_area(db, region.id).await?;

        let target = factory::user::UserFactory::new(db)
            .role(Role::BacentaLeader)
            .area_id(first_area.id)
            .build()
            .await?;

        let service = UserService::new(db);
        let updated = service
            .update(
                target.id,
                UpdateUserParam {
                    full_name: None,
                    phone: None,
                    role: None,
                    area_id: Some(Some(second_area.id)),
                    active: None,
                },
                &governor,
                &Scope::Areas(vec![first_area.id, second_area.id]),
            )
            .await?;

        assert_eq!(updated.area_id, Some(second_area.id));

        Ok(())
    }
}
