use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    data::scope::ScopeResolver,
    dto::api::ErrorDto,
    dto::bacenta::{
        AddBacentaAttendanceDto, AddOfferingDto, BacentaAttendanceDto, BacentaMeetingDetailDto,
        BacentaMeetingDto, BacentaOfferingDto, CreateMeetingDto,
    },
    error::AppError,
    middleware::auth::{AuthGuard, AuthSession, Permission},
    model::bacenta::{
        AddBacentaAttendanceParam, AddOfferingParam, CreateMeetingParam, MeetingRangeParam,
    },
    service::bacenta::BacentaService,
    state::AppState,
};

/// Tag for grouping Bacenta meeting endpoints in OpenAPI documentation
pub static BACENTA_TAG: &str = "bacenta";

/// Query parameters for the meeting list: an optional date range.
#[derive(Deserialize, Default)]
pub struct MeetingQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Report a Bacenta meeting.
///
/// The meeting is always recorded against the authenticated leader; one
/// meeting per leader per date.
///
/// # Access Control
/// - `Pastoral` - Bishop, Governor, Area_Pastor or Bacenta_Leader
///
/// # Returns
/// - `201 Created` - The reported meeting
/// - `400 Bad Request` - Meeting already reported for that date
#[utoipa::path(
    post,
    path = "/api/bacenta/meetings",
    tag = BACENTA_TAG,
    request_body = CreateMeetingDto,
    responses(
        (status = 201, description = "Successfully reported meeting", body = BacentaMeetingDto),
        (status = 400, description = "Meeting already reported for that date", body = ErrorDto),
        (status = 403, description = "Caller has no pastoral role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_meeting(
    State(state): State<AppState>,
    session: AuthSession,
    Json(payload): Json<CreateMeetingDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Pastoral])
        .await?;

    let bacenta_service = BacentaService::new(&state.db);
    let meeting = bacenta_service
        .create_meeting(CreateMeetingParam {
            leader_id: caller.id,
            meeting_date: payload.meeting_date,
            venue: payload.venue,
            topic: payload.topic,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(meeting.into_dto())))
}

/// Get the meetings visible to the caller, optionally within a date range.
///
/// # Returns
/// - `200 OK` - Meetings in the caller's scope, newest first
#[utoipa::path(
    get,
    path = "/api/bacenta/meetings",
    tag = BACENTA_TAG,
    params(
        ("from" = Option<NaiveDate>, Query, description = "Earliest meeting date to include"),
        ("to" = Option<NaiveDate>, Query, description = "Latest meeting date to include")
    ),
    responses(
        (status = 200, description = "Successfully retrieved meetings", body = Vec<BacentaMeetingDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_meetings(
    State(state): State<AppState>,
    session: AuthSession,
    Query(query): Query<MeetingQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Pastoral])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    let bacenta_service = BacentaService::new(&state.db);
    let meetings = bacenta_service
        .get_meetings(
            MeetingRangeParam {
                from: query.from,
                to: query.to,
            },
            &scope,
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            meetings
                .into_iter()
                .map(|m| m.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get one meeting with its attendance list and offerings.
///
/// # Returns
/// - `200 OK` - The meeting detail
/// - `404 Not Found` - No such meeting, or outside the caller's scope
#[utoipa::path(
    get,
    path = "/api/bacenta/meetings/{id}",
    tag = BACENTA_TAG,
    params(
        ("id" = i32, Path, description = "Meeting ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved meeting", body = BacentaMeetingDetailDto),
        (status = 404, description = "Meeting not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_meeting_detail(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Pastoral])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    let bacenta_service = BacentaService::new(&state.db);
    let detail = bacenta_service.get_meeting_detail(id, &scope).await?;

    match detail {
        Some(detail) => Ok((StatusCode::OK, Json(detail.into_dto()))),
        None => Err(AppError::NotFound(format!("Meeting {id} not found"))),
    }
}

/// Add one attendee to a meeting.
///
/// # Returns
/// - `201 Created` - The attendance row
/// - `400 Bad Request` - Member already recorded at this meeting
/// - `404 Not Found` - Meeting or member missing, or outside the caller's scope
#[utoipa::path(
    post,
    path = "/api/bacenta/meetings/{id}/attendance",
    tag = BACENTA_TAG,
    params(
        ("id" = i32, Path, description = "Meeting ID")
    ),
    request_body = AddBacentaAttendanceDto,
    responses(
        (status = 201, description = "Successfully added attendee", body = BacentaAttendanceDto),
        (status = 400, description = "Member already recorded", body = ErrorDto),
        (status = 404, description = "Meeting or member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_meeting_attendance(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
    Json(payload): Json<AddBacentaAttendanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Pastoral])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    let bacenta_service = BacentaService::new(&state.db);
    let attendance = bacenta_service
        .add_attendance(
            AddBacentaAttendanceParam {
                meeting_id: id,
                member_id: payload.member_id,
                first_timer: payload.first_timer,
            },
            &scope,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(attendance.into_dto())))
}

/// Add one offering to a meeting.
///
/// Amounts are in minor currency units and must be positive.
///
/// # Returns
/// - `201 Created` - The offering row
/// - `400 Bad Request` - Amount not positive
/// - `404 Not Found` - No such meeting, or outside the caller's scope
#[utoipa::path(
    post,
    path = "/api/bacenta/meetings/{id}/offerings",
    tag = BACENTA_TAG,
    params(
        ("id" = i32, Path, description = "Meeting ID")
    ),
    request_body = AddOfferingDto,
    responses(
        (status = 201, description = "Successfully added offering", body = BacentaOfferingDto),
        (status = 400, description = "Amount not positive", body = ErrorDto),
        (status = 404, description = "Meeting not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_meeting_offering(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
    Json(payload): Json<AddOfferingDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Pastoral])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    let bacenta_service = BacentaService::new(&state.db);
    let offering = bacenta_service
        .add_offering(
            AddOfferingParam {
                meeting_id: id,
                amount_minor: payload.amount_minor,
                note: payload.note,
            },
            &scope,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(offering.into_dto())))
}
