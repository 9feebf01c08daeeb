//! Notification service for business logic.
//!
//! Sends are either targeted at one leader inside the sender's scope or
//! broadcast to every active leader in it. Reads and the read-flag update are
//! always restricted to the authenticated leader's own inbox.

use sea_orm::DatabaseConnection;

use crate::data::{notification::NotificationRepository, user::UserRepository};
use crate::error::AppError;
use crate::model::notification::{Notification, SendNotificationParam};
use crate::model::scope::Scope;
use crate::service::user::user_in_scope;

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends a notification to one leader or broadcasts to the whole scope.
    ///
    /// A broadcast covers every active leader inside the sender's scope; an
    /// empty scope delivers nothing and is not an error.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications delivered
    /// - `Err(AppError::BadRequest)` - Targeted recipient missing or outside the scope
    pub async fn send(
        &self,
        param: SendNotificationParam,
        sender_scope: &Scope,
    ) -> Result<u64, AppError> {
        let notification_repo = NotificationRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        match param.user_id {
            Some(user_id) => {
                let recipient = user_repo.find_by_id(user_id).await?.ok_or_else(|| {
                    AppError::BadRequest(format!("User {user_id} does not exist"))
                })?;

                if !user_in_scope(&recipient, sender_scope) {
                    return Err(AppError::BadRequest(format!(
                        "User {user_id} is outside your scope"
                    )));
                }

                notification_repo
                    .create(recipient.id, &param.title, &param.body)
                    .await?;

                Ok(1)
            }
            None => {
                let recipients = user_repo.get_active_in_scope(sender_scope).await?;
                let delivered = recipients.len() as u64;

                for recipient in recipients {
                    notification_repo
                        .create(recipient.id, &param.title, &param.body)
                        .await?;
                }

                tracing::info!("Broadcast notification delivered to {} leaders", delivered);

                Ok(delivered)
            }
        }
    }

    /// Gets the authenticated leader's notifications, newest first.
    pub async fn get_own(
        &self,
        user_id: i32,
        unread_only: bool,
    ) -> Result<Vec<Notification>, AppError> {
        let notification_repo = NotificationRepository::new(self.db);

        Ok(notification_repo.get_by_user(user_id, unread_only).await?)
    }

    /// Marks one of the leader's own notifications as read.
    ///
    /// # Returns
    /// - `Ok(Notification)` - The updated notification
    /// - `Err(AppError::NotFound)` - Not found, or belongs to another leader
    pub async fn mark_read(&self, id: i32, user_id: i32) -> Result<Notification, AppError> {
        let notification_repo = NotificationRepository::new(self.db);

        notification_repo
            .mark_read(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Notification {id} not found")))
    }
}
