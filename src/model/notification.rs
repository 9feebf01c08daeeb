//! Notification domain models and parameters.

use chrono::{DateTime, Utc};

use crate::dto::notification::NotificationDto;

/// An in-app notification delivered to one leader.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Database id of the notification.
    pub id: i32,
    /// Leader the notification belongs to.
    pub user_id: i32,
    /// Short headline.
    pub title: String,
    /// Message body.
    pub body: String,
    /// Whether the leader has read it.
    pub read: bool,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Converts the notification domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `NotificationDto` - The converted notification DTO
    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            title: self.title,
            body: self.body,
            read: self.read,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a notification domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Notification` - The converted notification domain model
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            body: entity.body,
            read: entity.read,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for sending a notification.
///
/// With `user_id` absent the notification is broadcast to every active leader
/// inside the sender's scope.
#[derive(Debug, Clone)]
pub struct SendNotificationParam {
    /// Single recipient, or `None` to broadcast.
    pub user_id: Option<i32>,
    /// Short headline.
    pub title: String,
    /// Message body.
    pub body: String,
}
