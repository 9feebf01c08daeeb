use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::PaginationQuery,
    data::scope::ScopeResolver,
    error::AppError,
    middleware::auth::{AuthGuard, AuthSession, Permission},
    model::sync::GetSyncLogsParam,
    service::sync::SyncService,
    state::AppState,
};

/// POST /api/sync - Run a simulated push to the central office
///
/// Counts the records in the caller's scope, simulates the push and writes a
/// log entry.
///
/// # Returns
/// - `200 OK`: Pushed/failed counts, duration and status
pub async fn run_sync(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::RunSync])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    let sync_service = SyncService::new(&state.db);
    let result = sync_service.run(caller.id, &scope).await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// GET /api/sync/logs - Past sync runs, newest first
///
/// # Returns
/// - `200 OK`: Paginated log entries
pub async fn get_sync_logs(
    State(state): State<AppState>,
    session: AuthSession,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::RunSync])
        .await?;

    let sync_service = SyncService::new(&state.db);
    let logs = sync_service
        .get_logs(GetSyncLogsParam {
            page: pagination.page,
            per_page: pagination.per_page,
        })
        .await?;

    Ok((StatusCode::OK, Json(logs.into_dto())))
}
