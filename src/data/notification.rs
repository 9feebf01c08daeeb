use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::notification::Notification;

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a notification for one leader
    pub async fn create(
        &self,
        user_id: i32,
        title: &str,
        body: &str,
    ) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            title: ActiveValue::Set(title.to_string()),
            body: ActiveValue::Set(body.to_string()),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Gets a leader's notifications, newest first
    pub async fn get_by_user(
        &self,
        user_id: i32,
        unread_only: bool,
    ) -> Result<Vec<Notification>, DbErr> {
        let mut query = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id);

        if unread_only {
            query = query.filter(entity::notification::Column::Read.eq(false));
        }

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(Notification::from_entity).collect())
    }

    /// Marks a notification read if it belongs to the leader
    pub async fn mark_read(&self, id: i32, user_id: i32) -> Result<Option<Notification>, DbErr> {
        let entity = entity::prelude::Notification::find_by_id(id)
            .filter(entity::notification::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        let entity = match entity {
            Some(entity) => entity,
            None => return Ok(None),
        };

        let mut active_model: entity::notification::ActiveModel = entity.into();
        active_model.read = ActiveValue::Set(true);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Notification::from_entity(entity)))
    }
}
