use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::scope::ScopeResolver,
    dto::call_log::LogCallDto,
    error::AppError,
    middleware::auth::{AuthGuard, AuthSession, Permission},
    model::call_log::{outcome_from_string, LogCallParam},
    service::call_log::CallLogService,
    state::AppState,
};

/// POST /api/members/{id}/calls - Log a shepherding call
///
/// The caller is always the authenticated user; the call date defaults to
/// today when the payload omits it.
///
/// # Returns
/// - `201 Created`: The logged call
/// - `400 Bad Request`: Unknown outcome
/// - `404 Not Found`: No such member, or outside the caller's scope
pub async fn log_call(
    State(state): State<AppState>,
    session: AuthSession,
    Path(member_id): Path<i32>,
    Json(payload): Json<LogCallDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Pastoral])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    let outcome = outcome_from_string(&payload.outcome)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown outcome '{}'", payload.outcome)))?;

    let call_service = CallLogService::new(&state.db);
    let call = call_service
        .log_call(
            LogCallParam {
                member_id,
                caller_id: caller.id,
                outcome,
                notes: payload.notes,
                called_on: payload
                    .called_on
                    .unwrap_or_else(|| chrono::Utc::now().date_naive()),
            },
            &scope,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(call.into_dto())))
}

/// GET /api/members/{id}/calls - Call history for a member
///
/// Newest first.
///
/// # Returns
/// - `200 OK`: Logged calls (possibly empty)
/// - `404 Not Found`: No such member, or outside the caller's scope
pub async fn get_member_calls(
    State(state): State<AppState>,
    session: AuthSession,
    Path(member_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Pastoral])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    let call_service = CallLogService::new(&state.db);
    let calls = call_service.get_by_member(member_id, &scope).await?;

    Ok((
        StatusCode::OK,
        Json(calls.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}
