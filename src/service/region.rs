//! Region service for business logic.
//!
//! Regions are managed by the Bishop alone; Governors can read the regions
//! assigned to them. Governor assignments are validated against the role of
//! the assignee, and deletion is blocked while areas still hang off a region.

use sea_orm::DatabaseConnection;

use crate::data::{region::RegionRepository, user::UserRepository};
use crate::error::AppError;
use crate::model::region::{CreateRegionParam, Region, UpdateRegionParam};

use entity::user::Role;

pub struct RegionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a region.
    ///
    /// # Returns
    /// - `Ok(Region)` - The created region
    /// - `Err(AppError::BadRequest)` - Name taken, or the assignee is not a Governor
    pub async fn create(&self, param: CreateRegionParam) -> Result<Region, AppError> {
        let region_repo = RegionRepository::new(self.db);

        if region_repo.name_exists(&param.name).await? {
            return Err(AppError::BadRequest(format!(
                "Region name '{}' is already taken",
                param.name
            )));
        }

        if let Some(governor_id) = param.governor_id {
            self.check_governor_role(governor_id).await?;
        }

        let region = region_repo.create(param).await?;

        tracing::info!("Region {} created", region.id);

        Ok(region)
    }

    /// Gets the regions the caller may see.
    ///
    /// A Bishop sees every region; a Governor sees the regions assigned to
    /// them; everyone else sees none.
    pub async fn get_all(&self, caller: &entity::user::Model) -> Result<Vec<Region>, AppError> {
        let region_repo = RegionRepository::new(self.db);

        let regions = match caller.role {
            Role::Bishop => region_repo.get_all().await?,
            Role::Governor => region_repo.get_by_governor(caller.id).await?,
            _ => Vec::new(),
        };

        Ok(regions)
    }

    /// Gets one region if the caller may see it.
    ///
    /// # Returns
    /// - `Ok(Some(Region))` - Region found and visible
    /// - `Ok(None)` - No such region, or outside the caller's view
    pub async fn get_by_id(
        &self,
        id: i32,
        caller: &entity::user::Model,
    ) -> Result<Option<Region>, AppError> {
        let region_repo = RegionRepository::new(self.db);

        let region = region_repo.get_by_id(id).await?;

        let region = region.filter(|r| match caller.role {
            Role::Bishop => true,
            Role::Governor => r.governor_id == Some(caller.id),
            _ => false,
        });

        Ok(region)
    }

    /// Updates a region's name or governor assignment.
    ///
    /// # Returns
    /// - `Ok(Region)` - The updated region
    /// - `Err(AppError::NotFound)` - No such region
    /// - `Err(AppError::BadRequest)` - Name taken, or the assignee is not a Governor
    pub async fn update(&self, id: i32, param: UpdateRegionParam) -> Result<Region, AppError> {
        let region_repo = RegionRepository::new(self.db);

        let existing = region_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Region {id} not found")))?;

        if let Some(name) = &param.name {
            if *name != existing.name && region_repo.name_exists(name).await? {
                return Err(AppError::BadRequest(format!(
                    "Region name '{name}' is already taken"
                )));
            }
        }

        if let Some(Some(governor_id)) = param.governor_id {
            self.check_governor_role(governor_id).await?;
        }

        let region = region_repo.update(id, param).await?;

        Ok(region)
    }

    /// Deletes a region.
    ///
    /// # Returns
    /// - `Ok(())` - Region deleted
    /// - `Err(AppError::NotFound)` - No such region
    /// - `Err(AppError::BadRequest)` - Areas are still attached to the region
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let region_repo = RegionRepository::new(self.db);

        if region_repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Region {id} not found")));
        }

        let area_count = region_repo.area_count(id).await?;
        if area_count > 0 {
            return Err(AppError::BadRequest(format!(
                "Region {id} still has {area_count} areas attached"
            )));
        }

        region_repo.delete(id).await?;

        tracing::info!("Region {id} deleted");

        Ok(())
    }

    /// Verifies that the given user exists and holds the Governor role.
    async fn check_governor_role(&self, governor_id: i32) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let governor = user_repo
            .find_by_id(governor_id)
            .await?
            .ok_or_else(|| AppError::BadRequest(format!("User {governor_id} does not exist")))?;

        if governor.role != Role::Governor {
            return Err(AppError::BadRequest(format!(
                "User {governor_id} is not a Governor"
            )));
        }

        Ok(())
    }
}
