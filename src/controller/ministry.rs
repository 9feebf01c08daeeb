use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    dto::api::ErrorDto,
    dto::ministry::{
        AddMinistryMemberDto, CreateMinistryDto, MinistryAttendanceDto, MinistryDto,
        RecordMinistryAttendanceDto,
    },
    error::AppError,
    middleware::auth::{AuthGuard, AuthSession, Permission},
    model::ministry::{CreateMinistryParam, RecordMinistryAttendanceParam},
    service::ministry::MinistryService,
    state::AppState,
};

/// Tag for grouping ministry endpoints in OpenAPI documentation
pub static MINISTRY_TAG: &str = "ministry";

/// Query parameters for the ministry attendance list: an optional date range.
#[derive(Deserialize, Default)]
pub struct MinistryAttendanceQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Create a ministry.
///
/// An optional leader assignment is validated against the Ministry_Leader
/// role.
///
/// # Access Control
/// - `ManageMinistries` - Bishop only
///
/// # Returns
/// - `201 Created` - The created ministry
/// - `400 Bad Request` - Name taken, or the assignee is not a Ministry_Leader
#[utoipa::path(
    post,
    path = "/api/ministries",
    tag = MINISTRY_TAG,
    request_body = CreateMinistryDto,
    responses(
        (status = 201, description = "Successfully created ministry", body = MinistryDto),
        (status = 400, description = "Name taken or invalid leader", body = ErrorDto),
        (status = 403, description = "Caller is not the Bishop", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ministry(
    State(state): State<AppState>,
    session: AuthSession,
    Json(payload): Json<CreateMinistryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageMinistries])
        .await?;

    let ministry_service = MinistryService::new(&state.db);
    let ministry = ministry_service
        .create(CreateMinistryParam {
            name: payload.name,
            leader_id: payload.leader_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ministry.into_dto())))
}

/// Get every ministry.
///
/// Ministries cut across the area hierarchy, so the list is not scoped.
///
/// # Returns
/// - `200 OK` - All ministries, ordered by name
#[utoipa::path(
    get,
    path = "/api/ministries",
    tag = MINISTRY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved ministries", body = Vec<MinistryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ministries(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let ministry_service = MinistryService::new(&state.db);
    let ministries = ministry_service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            ministries
                .into_iter()
                .map(|m| m.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a specific ministry by ID.
///
/// # Returns
/// - `200 OK` - The ministry
/// - `404 Not Found` - No such ministry
#[utoipa::path(
    get,
    path = "/api/ministries/{id}",
    tag = MINISTRY_TAG,
    params(
        ("id" = i32, Path, description = "Ministry ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved ministry", body = MinistryDto),
        (status = 404, description = "Ministry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ministry_by_id(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let ministry_service = MinistryService::new(&state.db);
    let ministry = ministry_service.get_by_id(id).await?;

    match ministry {
        Some(ministry) => Ok((StatusCode::OK, Json(ministry.into_dto()))),
        None => Err(AppError::NotFound(format!("Ministry {id} not found"))),
    }
}

/// Add a member to a ministry roster.
///
/// Members may belong to several ministries at once.
///
/// # Access Control
/// - Bishop, or the leader of this ministry
///
/// # Returns
/// - `204 No Content` - Member added
/// - `400 Bad Request` - Member already on the roster
/// - `403 Forbidden` - Caller does not manage this ministry
/// - `404 Not Found` - Ministry or member missing
#[utoipa::path(
    post,
    path = "/api/ministries/{id}/members",
    tag = MINISTRY_TAG,
    params(
        ("id" = i32, Path, description = "Ministry ID")
    ),
    request_body = AddMinistryMemberDto,
    responses(
        (status = 204, description = "Successfully added member"),
        (status = 400, description = "Member already on the roster", body = ErrorDto),
        (status = 403, description = "Caller does not manage this ministry", body = ErrorDto),
        (status = 404, description = "Ministry or member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_ministry_member(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
    Json(payload): Json<AddMinistryMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let ministry_service = MinistryService::new(&state.db);
    ministry_service
        .add_member(id, payload.member_id, &caller)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove a member from a ministry roster.
///
/// # Access Control
/// - Bishop, or the leader of this ministry
///
/// # Returns
/// - `204 No Content` - Member removed
/// - `403 Forbidden` - Caller does not manage this ministry
/// - `404 Not Found` - Ministry missing, or member not on the roster
#[utoipa::path(
    delete,
    path = "/api/ministries/{id}/members/{member_id}",
    tag = MINISTRY_TAG,
    params(
        ("id" = i32, Path, description = "Ministry ID"),
        ("member_id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 204, description = "Successfully removed member"),
        (status = 403, description = "Caller does not manage this ministry", body = ErrorDto),
        (status = 404, description = "Ministry or roster entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_ministry_member(
    State(state): State<AppState>,
    session: AuthSession,
    Path((id, member_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let ministry_service = MinistryService::new(&state.db);
    ministry_service.remove_member(id, member_id, &caller).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the member ids on a ministry roster.
///
/// # Returns
/// - `200 OK` - Roster member ids (possibly empty)
/// - `404 Not Found` - No such ministry
#[utoipa::path(
    get,
    path = "/api/ministries/{id}/members",
    tag = MINISTRY_TAG,
    params(
        ("id" = i32, Path, description = "Ministry ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved roster", body = Vec<i32>),
        (status = 404, description = "Ministry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ministry_roster(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let ministry_service = MinistryService::new(&state.db);
    let roster = ministry_service.get_roster(id).await?;

    Ok((StatusCode::OK, Json(roster)))
}

/// Record a ministry headcount for one service day.
///
/// One tally per ministry per date.
///
/// # Access Control
/// - Bishop, or the leader of this ministry
///
/// # Returns
/// - `201 Created` - The tally
/// - `400 Bad Request` - Negative headcount, or tally already recorded
/// - `403 Forbidden` - Caller does not manage this ministry
/// - `404 Not Found` - No such ministry
#[utoipa::path(
    post,
    path = "/api/ministries/{id}/attendance",
    tag = MINISTRY_TAG,
    params(
        ("id" = i32, Path, description = "Ministry ID")
    ),
    request_body = RecordMinistryAttendanceDto,
    responses(
        (status = 201, description = "Successfully recorded headcount", body = MinistryAttendanceDto),
        (status = 400, description = "Negative headcount or already recorded", body = ErrorDto),
        (status = 403, description = "Caller does not manage this ministry", body = ErrorDto),
        (status = 404, description = "Ministry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_ministry_attendance(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
    Json(payload): Json<RecordMinistryAttendanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let ministry_service = MinistryService::new(&state.db);
    let attendance = ministry_service
        .record_attendance(
            RecordMinistryAttendanceParam {
                ministry_id: id,
                service_date: payload.service_date,
                headcount: payload.headcount,
                recorded_by: caller.id,
            },
            &caller,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(attendance.into_dto())))
}

/// Get a ministry's headcount tallies, optionally within a date range.
///
/// # Returns
/// - `200 OK` - Tallies, oldest first
/// - `404 Not Found` - No such ministry
#[utoipa::path(
    get,
    path = "/api/ministries/{id}/attendance",
    tag = MINISTRY_TAG,
    params(
        ("id" = i32, Path, description = "Ministry ID"),
        ("from" = Option<NaiveDate>, Query, description = "Earliest service date to include"),
        ("to" = Option<NaiveDate>, Query, description = "Latest service date to include")
    ),
    responses(
        (status = 200, description = "Successfully retrieved tallies", body = Vec<MinistryAttendanceDto>),
        (status = 404, description = "Ministry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ministry_attendance(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
    Query(query): Query<MinistryAttendanceQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let ministry_service = MinistryService::new(&state.db);
    let tallies = ministry_service
        .get_attendance_range(id, query.from, query.to)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            tallies
                .into_iter()
                .map(|t| t.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}
