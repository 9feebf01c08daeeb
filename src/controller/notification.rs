use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    data::scope::ScopeResolver,
    dto::notification::SendNotificationDto,
    error::AppError,
    middleware::auth::{AuthGuard, AuthSession, Permission},
    model::notification::SendNotificationParam,
    service::notification::NotificationService,
    state::AppState,
};

/// Query parameters for the notification list.
#[derive(Deserialize, Default)]
pub struct NotificationQuery {
    #[serde(default)]
    pub unread: bool,
}

/// POST /api/notifications - Send a notification
///
/// A single recipient when `user_id` is given; a broadcast to every leader in
/// the sender's scope otherwise.
///
/// # Returns
/// - `200 OK`: Number of notifications delivered
/// - `400 Bad Request`: Recipient missing, or outside the sender's scope
pub async fn send_notification(
    State(state): State<AppState>,
    session: AuthSession,
    Json(payload): Json<SendNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let sender = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SendNotifications])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&sender).await?;

    let notification_service = NotificationService::new(&state.db);
    let delivered = notification_service
        .send(
            SendNotificationParam {
                user_id: payload.user_id,
                title: payload.title,
                body: payload.body,
            },
            &scope,
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "delivered": delivered })),
    ))
}

/// GET /api/notifications?unread=true - The caller's own notifications
///
/// Newest first; `unread=true` filters out everything already read.
///
/// # Returns
/// - `200 OK`: Notifications (possibly empty)
pub async fn get_notifications(
    State(state): State<AppState>,
    session: AuthSession,
    Query(query): Query<NotificationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let notification_service = NotificationService::new(&state.db);
    let notifications = notification_service.get_own(user.id, query.unread).await?;

    Ok((
        StatusCode::OK,
        Json(
            notifications
                .into_iter()
                .map(|n| n.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// PUT /api/notifications/{id}/read - Mark one of the caller's notifications read
///
/// Only the recipient can mark a notification; anyone else gets a 404.
///
/// # Returns
/// - `200 OK`: The updated notification
/// - `404 Not Found`: No such notification for this user
pub async fn mark_notification_read(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let notification_service = NotificationService::new(&state.db);
    let notification = notification_service.mark_read(id, user.id).await?;

    Ok((StatusCode::OK, Json(notification.into_dto())))
}
