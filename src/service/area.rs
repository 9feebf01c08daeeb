//! Area service for business logic.
//!
//! Area writes are open to Bishops and Governors, but a Governor may only
//! touch areas inside the regions they govern. Overseer assignments are
//! validated against the Area_Pastor role, and deletion is blocked while
//! members still belong to an area.

use sea_orm::DatabaseConnection;

use crate::data::{area::AreaRepository, region::RegionRepository, user::UserRepository};
use crate::error::{auth::AuthError, AppError};
use crate::model::area::{Area, CreateAreaParam, UpdateAreaParam};
use crate::model::scope::Scope;

use entity::user::Role;

pub struct AreaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AreaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an area.
    ///
    /// # Returns
    /// - `Ok(Area)` - The created area
    /// - `Err(AppError::BadRequest)` - Unknown region, or the overseer is not an Area Pastor
    /// - `Err(AuthError::AccessDenied)` - Governor creating outside their regions
    pub async fn create(
        &self,
        param: CreateAreaParam,
        caller: &entity::user::Model,
    ) -> Result<Area, AppError> {
        let area_repo = AreaRepository::new(self.db);
        let region_repo = RegionRepository::new(self.db);

        let region = region_repo
            .get_by_id(param.region_id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!("Region {} does not exist", param.region_id))
            })?;

        if caller.role == Role::Governor && region.governor_id != Some(caller.id) {
            return Err(AuthError::AccessDenied(
                caller.id,
                format!("attempted to create an area in region {}", region.id),
            )
            .into());
        }

        if let Some(overseer_id) = param.overseer_id {
            self.check_overseer_role(overseer_id).await?;
        }

        let area = area_repo.create(param).await?;

        tracing::info!("Area {} created in region {}", area.id, area.region_id);

        Ok(area)
    }

    /// Gets the areas visible in a scope, ordered by name.
    pub async fn get_all(&self, scope: &Scope) -> Result<Vec<Area>, AppError> {
        let area_repo = AreaRepository::new(self.db);

        Ok(area_repo.get_all(scope).await?)
    }

    /// Gets one area if the scope covers it.
    ///
    /// # Returns
    /// - `Ok(Some(Area))` - Area found and visible
    /// - `Ok(None)` - No such area, or outside the scope
    pub async fn get_by_id(&self, id: i32, scope: &Scope) -> Result<Option<Area>, AppError> {
        let area_repo = AreaRepository::new(self.db);

        let area = area_repo.get_by_id(id).await?;

        Ok(area.filter(|a| scope.includes_area(a.id)))
    }

    /// Updates an area's name or overseer assignment.
    ///
    /// # Returns
    /// - `Ok(Area)` - The updated area
    /// - `Err(AppError::NotFound)` - No such area, or outside the caller's scope
    /// - `Err(AppError::BadRequest)` - The overseer is not an Area Pastor
    pub async fn update(
        &self,
        id: i32,
        param: UpdateAreaParam,
        scope: &Scope,
    ) -> Result<Area, AppError> {
        let area_repo = AreaRepository::new(self.db);

        if self.get_by_id(id, scope).await?.is_none() {
            return Err(AppError::NotFound(format!("Area {id} not found")));
        }

        if let Some(Some(overseer_id)) = param.overseer_id {
            self.check_overseer_role(overseer_id).await?;
        }

        let area = area_repo.update(id, param).await?;

        Ok(area)
    }

    /// Deletes an area.
    ///
    /// # Returns
    /// - `Ok(())` - Area deleted
    /// - `Err(AppError::NotFound)` - No such area, or outside the caller's scope
    /// - `Err(AppError::BadRequest)` - Members still belong to the area
    pub async fn delete(&self, id: i32, scope: &Scope) -> Result<(), AppError> {
        let area_repo = AreaRepository::new(self.db);

        if self.get_by_id(id, scope).await?.is_none() {
            return Err(AppError::NotFound(format!("Area {id} not found")));
        }

        let member_count = area_repo.member_count(id).await?;
        if member_count > 0 {
            return Err(AppError::BadRequest(format!(
                "Area {id} still has {member_count} members attached"
            )));
        }

        area_repo.delete(id).await?;

        tracing::info!("Area {id} deleted");

        Ok(())
    }

    /// Verifies that the given user exists and holds the Area_Pastor role.
    async fn check_overseer_role(&self, overseer_id: i32) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let overseer = user_repo
            .find_by_id(overseer_id)
            .await?
            .ok_or_else(|| AppError::BadRequest(format!("User {overseer_id} does not exist")))?;

        if overseer.role != Role::AreaPastor {
            return Err(AppError::BadRequest(format!(
                "User {overseer_id} is not an Area Pastor"
            )));
        }

        Ok(())
    }
}
