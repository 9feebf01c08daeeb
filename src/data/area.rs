use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::data::scope::area_condition;
use crate::model::area::{Area, CreateAreaParam, UpdateAreaParam};
use crate::model::scope::Scope;

pub struct AreaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AreaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new area
    pub async fn create(&self, param: CreateAreaParam) -> Result<Area, DbErr> {
        let entity = entity::area::ActiveModel {
            name: ActiveValue::Set(param.name),
            region_id: ActiveValue::Set(param.region_id),
            overseer_id: ActiveValue::Set(param.overseer_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Area::from_entity(entity))
    }

    /// Gets all areas visible in a scope, ordered by name
    pub async fn get_all(&self, scope: &Scope) -> Result<Vec<Area>, DbErr> {
        let entities = entity::prelude::Area::find()
            .filter(area_condition(scope))
            .order_by_asc(entity::area::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Area::from_entity).collect())
    }

    /// Gets an area by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Area>, DbErr> {
        let entity = entity::prelude::Area::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Area::from_entity))
    }

    /// Updates an area's name and overseer assignment
    pub async fn update(&self, id: i32, param: UpdateAreaParam) -> Result<Area, DbErr> {
        let entity = entity::prelude::Area::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Area with id {id} not found"
            )))?;

        let mut active_model: entity::area::ActiveModel = entity.into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(overseer_id) = param.overseer_id {
            active_model.overseer_id = ActiveValue::Set(overseer_id);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Area::from_entity(entity))
    }

    /// Deletes an area
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Area::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Counts the members attached to an area
    pub async fn member_count(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::Member::find()
            .filter(entity::member::Column::AreaId.eq(id))
            .count(self.db)
            .await
    }
}
