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
    dto::attendance::{BulkAttendanceDto, RecordAttendanceDto},
    error::AppError,
    middleware::auth::{AuthGuard, AuthSession, Permission},
    model::attendance::{BulkAttendanceParam, BulkAttendanceRecord, RecordAttendanceParam},
    service::attendance::AttendanceService,
    state::AppState,
};

/// Query parameters for the attendance list.
#[derive(Deserialize)]
pub struct AttendanceQuery {
    pub service_date: NaiveDate,
}

/// POST /api/attendance - Record one member's Sunday attendance
///
/// One record per member per Sunday; re-submitting the same pair is a 400.
///
/// # Returns
/// - `201 Created`: The attendance record
/// - `400 Bad Request`: Already recorded for that Sunday
/// - `404 Not Found`: No such member, or outside the caller's scope
pub async fn record_attendance(
    State(state): State<AppState>,
    session: AuthSession,
    Json(payload): Json<RecordAttendanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Pastoral])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    let attendance_service = AttendanceService::new(&state.db);
    let attendance = attendance_service
        .record(
            RecordAttendanceParam {
                member_id: payload.member_id,
                service_date: payload.service_date,
                present: payload.present,
            },
            caller.id,
            &scope,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(attendance.into_dto())))
}

/// POST /api/attendance/bulk - Record a whole Sunday in one call
///
/// Rows fail independently; out-of-scope, unknown and already-recorded
/// members come back in the errors list while the rest are saved.
///
/// # Returns
/// - `200 OK`: Count recorded plus per-member failures
pub async fn record_bulk_attendance(
    State(state): State<AppState>,
    session: AuthSession,
    Json(payload): Json<BulkAttendanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Pastoral])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    let attendance_service = AttendanceService::new(&state.db);
    let result = attendance_service
        .record_bulk(
            BulkAttendanceParam {
                service_date: payload.service_date,
                records: payload
                    .records
                    .into_iter()
                    .map(|r| BulkAttendanceRecord {
                        member_id: r.member_id,
                        present: r.present,
                    })
                    .collect(),
            },
            caller.id,
            &scope,
        )
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// GET /api/attendance?service_date=YYYY-MM-DD - Records for one Sunday
///
/// Returns the records for members in the caller's scope only.
///
/// # Returns
/// - `200 OK`: Attendance records (possibly empty)
pub async fn get_attendance(
    State(state): State<AppState>,
    session: AuthSession,
    Query(query): Query<AttendanceQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Pastoral])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    let attendance_service = AttendanceService::new(&state.db);
    let records = attendance_service
        .get_by_service_date(query.service_date, &scope)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            records
                .into_iter()
                .map(|r| r.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}
