use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    data::scope::ScopeResolver,
    error::AppError,
    middleware::auth::{AuthGuard, AuthSession, Permission},
    service::report::ReportService,
    state::AppState,
};

/// Date range for report queries. Both bounds are required and inclusive.
#[derive(Deserialize)]
pub struct ReportRangeQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// GET /api/reports/attendance?from&to - Sunday attendance summary
///
/// Per-Sunday present/absent counts and percentages over the caller's scope.
///
/// # Returns
/// - `200 OK`: The report
/// - `400 Bad Request`: Range reversed
pub async fn attendance_report(
    State(state): State<AppState>,
    session: AuthSession,
    Query(query): Query<ReportRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Pastoral])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    let report_service = ReportService::new(&state.db);
    let report = report_service
        .attendance_report(query.from, query.to, &scope)
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// GET /api/reports/offerings?from&to - Bacenta offering summary
///
/// Per-date offering totals in minor units over the caller's scope.
///
/// # Returns
/// - `200 OK`: The report
/// - `400 Bad Request`: Range reversed
pub async fn offerings_report(
    State(state): State<AppState>,
    session: AuthSession,
    Query(query): Query<ReportRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Pastoral])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    let report_service = ReportService::new(&state.db);
    let report = report_service
        .offerings_report(query.from, query.to, &scope)
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// GET /api/reports/members - Membership breakdown
///
/// Per-state and per-area member counts over the caller's scope. Every state
/// appears even when its count is zero.
///
/// # Returns
/// - `200 OK`: The report
pub async fn membership_report(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Pastoral])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    let report_service = ReportService::new(&state.db);
    let report = report_service.membership_report(&scope).await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}
