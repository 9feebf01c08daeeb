use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::region::{CreateRegionParam, Region, UpdateRegionParam};

pub struct RegionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new region
    pub async fn create(&self, param: CreateRegionParam) -> Result<Region, DbErr> {
        let entity = entity::region::ActiveModel {
            name: ActiveValue::Set(param.name),
            governor_id: ActiveValue::Set(param.governor_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Region::from_entity(entity))
    }

    /// Gets all regions ordered by name
    pub async fn get_all(&self) -> Result<Vec<Region>, DbErr> {
        let entities = entity::prelude::Region::find()
            .order_by_asc(entity::region::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Region::from_entity).collect())
    }

    /// Gets the regions governed by a user, ordered by name
    pub async fn get_by_governor(&self, governor_id: i32) -> Result<Vec<Region>, DbErr> {
        let entities = entity::prelude::Region::find()
            .filter(entity::region::Column::GovernorId.eq(governor_id))
            .order_by_asc(entity::region::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Region::from_entity).collect())
    }

    /// Gets a region by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Region>, DbErr> {
        let entity = entity::prelude::Region::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Region::from_entity))
    }

    /// Checks if a region name is already taken
    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Region::find()
            .filter(entity::region::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Updates a region's name and governor assignment
    pub async fn update(&self, id: i32, param: UpdateRegionParam) -> Result<Region, DbErr> {
        let entity = entity::prelude::Region::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Region with id {id} not found"
            )))?;

        let mut active_model: entity::region::ActiveModel = entity.into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(governor_id) = param.governor_id {
            active_model.governor_id = ActiveValue::Set(governor_id);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Region::from_entity(entity))
    }

    /// Deletes a region
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Region::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Counts the areas attached to a region
    pub async fn area_count(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::Area::find()
            .filter(entity::area::Column::RegionId.eq(id))
            .count(self.db)
            .await
    }
}
