use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    data::scope::ScopeResolver,
    dto::api::ErrorDto,
    dto::member::{
        BulkTransferDto, BulkTransferResultDto, CreateMemberDto, MemberDto, PaginatedMembersDto,
        UpdateMemberDto, UpdateMemberStateDto,
    },
    error::AppError,
    middleware::auth::{AuthGuard, AuthSession, Permission},
    model::member::{
        state_from_string, BulkTransferParam, CreateMemberParam, MemberFilter, UpdateMemberParam,
    },
    service::{member::MemberService, upload},
    state::AppState,
};

use entity::member::MemberState;

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// Query parameters for the member list: optional narrowing filters plus
/// pagination.
#[derive(Deserialize)]
pub struct MemberQuery {
    pub state: Option<String>,
    pub area_id: Option<i32>,
    pub search: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    20
}

/// Get the members visible to the caller, with filters and pagination.
///
/// Filters narrow the caller's scope, never widen it; the search term matches
/// substrings of either name.
///
/// # Access Control
/// - `Pastoral` - Bishop, Governor, Area_Pastor or Bacenta_Leader
///
/// # Returns
/// - `200 OK` - Paginated members
/// - `400 Bad Request` - Unknown state filter
#[utoipa::path(
    get,
    path = "/api/members",
    tag = MEMBER_TAG,
    params(
        ("state" = Option<String>, Query, description = "Filter by engagement state (Sheep/Goat/Deer)"),
        ("area_id" = Option<i32>, Query, description = "Filter by area"),
        ("search" = Option<String>, Query, description = "Name substring search"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 20)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved members", body = PaginatedMembersDto),
        (status = 400, description = "Unknown state filter", body = ErrorDto),
        (status = 403, description = "Caller has no pastoral role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    session: AuthSession,
    Query(query): Query<MemberQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Pastoral])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    let state_filter = match query.state {
        Some(value) => Some(
            state_from_string(&value)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown state '{value}'")))?,
        ),
        None => None,
    };

    let member_service = MemberService::new(&state.db);
    let members = member_service
        .get_all(
            MemberFilter {
                state: state_filter,
                area_id: query.area_id,
                search: query.search,
                page: query.page,
                per_page: query.per_page,
            },
            &scope,
        )
        .await?;

    Ok((StatusCode::OK, Json(members.into_dto())))
}

/// Create a member.
///
/// New members start in the Sheep state. A Bacenta leader always becomes the
/// shepherding leader of members they create.
///
/// # Access Control
/// - `Pastoral` - Bishop, Governor, Area_Pastor or Bacenta_Leader
///
/// # Returns
/// - `201 Created` - The created member
/// - `400 Bad Request` - Unknown area or invalid leader assignment
/// - `403 Forbidden` - Area outside the caller's scope
#[utoipa::path(
    post,
    path = "/api/members",
    tag = MEMBER_TAG,
    request_body = CreateMemberDto,
    responses(
        (status = 201, description = "Successfully created member", body = MemberDto),
        (status = 400, description = "Unknown area or invalid leader", body = ErrorDto),
        (status = 403, description = "Area outside the caller's scope", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_member(
    State(state): State<AppState>,
    session: AuthSession,
    Json(payload): Json<CreateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Pastoral])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    let member_service = MemberService::new(&state.db);
    let member = member_service
        .create(
            CreateMemberParam {
                first_name: payload.first_name,
                last_name: payload.last_name,
                phone: payload.phone,
                residence: payload.residence,
                area_id: payload.area_id,
                leader_id: payload.leader_id,
                state: MemberState::Sheep,
                joined_on: payload
                    .joined_on
                    .unwrap_or_else(|| chrono::Utc::now().date_naive()),
            },
            &caller,
            &scope,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(member.into_dto())))
}

/// Get a specific member by ID.
///
/// # Returns
/// - `200 OK` - The member
/// - `404 Not Found` - No such member, or outside the caller's scope
#[utoipa::path(
    get,
    path = "/api/members/{id}",
    tag = MEMBER_TAG,
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved member", body = MemberDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_member_by_id(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Pastoral])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    let member_service = MemberService::new(&state.db);
    let member = member_service.get_by_id(id, &scope).await?;

    match member {
        Some(member) => Ok((StatusCode::OK, Json(member.into_dto()))),
        None => Err(AppError::NotFound(format!("Member {id} not found"))),
    }
}

/// Update a member.
///
/// # Access Control
/// - `Pastoral` - Bishop, Governor, Area_Pastor or Bacenta_Leader
///
/// # Returns
/// - `200 OK` - The updated member
/// - `400 Bad Request` - Unknown area or invalid leader assignment
/// - `403 Forbidden` - Area move outside the caller's scope
/// - `404 Not Found` - No such member, or outside the caller's scope
#[utoipa::path(
    put,
    path = "/api/members/{id}",
    tag = MEMBER_TAG,
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    request_body = UpdateMemberDto,
    responses(
        (status = 200, description = "Successfully updated member", body = MemberDto),
        (status = 400, description = "Unknown area or invalid leader", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_member(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Pastoral])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    let member_service = MemberService::new(&state.db);
    let member = member_service
        .update(
            id,
            UpdateMemberParam {
                first_name: Some(payload.first_name),
                last_name: Some(payload.last_name),
                phone: Some(payload.phone),
                residence: Some(payload.residence),
                area_id: Some(payload.area_id),
                leader_id: Some(payload.leader_id),
                state: None,
            },
            &caller,
            &scope,
        )
        .await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// Change a member's engagement state (Sheep/Goat/Deer).
///
/// # Returns
/// - `200 OK` - The updated member
/// - `400 Bad Request` - Unknown state
/// - `404 Not Found` - No such member, or outside the caller's scope
#[utoipa::path(
    put,
    path = "/api/members/{id}/state",
    tag = MEMBER_TAG,
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    request_body = UpdateMemberStateDto,
    responses(
        (status = 200, description = "Successfully updated state", body = MemberDto),
        (status = 400, description = "Unknown state", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_member_state(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMemberStateDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Pastoral])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    let new_state = state_from_string(&payload.state)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown state '{}'", payload.state)))?;

    let member_service = MemberService::new(&state.db);
    let member = member_service.update_state(id, new_state, &scope).await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// Delete a member.
///
/// # Returns
/// - `204 No Content` - Member deleted
/// - `404 Not Found` - No such member, or outside the caller's scope
#[utoipa::path(
    delete,
    path = "/api/members/{id}",
    tag = MEMBER_TAG,
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted member"),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_member(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Pastoral])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    let member_service = MemberService::new(&state.db);
    member_service.delete(id, &scope).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Reassign members to another Bacenta leader in bulk.
///
/// Each member moves independently; failures are collected per member while
/// the rest of the batch proceeds. The receiving leader is notified.
///
/// # Access Control
/// - `Pastoral` - Bishop, Governor, Area_Pastor or Bacenta_Leader
///
/// # Returns
/// - `200 OK` - Count moved plus per-member failures
/// - `400 Bad Request` - Receiving leader invalid or outside the scope
#[utoipa::path(
    post,
    path = "/api/members/bulk-transfer",
    tag = MEMBER_TAG,
    request_body = BulkTransferDto,
    responses(
        (status = 200, description = "Transfer outcome", body = BulkTransferResultDto),
        (status = 400, description = "Receiving leader invalid", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn bulk_transfer_members(
    State(state): State<AppState>,
    session: AuthSession,
    Json(payload): Json<BulkTransferDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Pastoral])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    let member_service = MemberService::new(&state.db);
    let result = member_service
        .bulk_transfer(
            BulkTransferParam {
                leader_id: payload.leader_id,
                member_ids: payload.member_ids,
            },
            &scope,
        )
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// POST /api/members/{id}/photo - Upload a member's photo
///
/// Multipart form with a single `photo` field (image/jpeg or image/png).
///
/// # Returns
/// - `200 OK`: Photo stored, URL set on the member
/// - `400 Bad Request`: Missing field, wrong type or empty file
/// - `404 Not Found`: No such member, or outside the caller's scope
pub async fn upload_member_photo(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Pastoral])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    // Check the target before touching the filesystem so a rejected upload
    // leaves no orphan file behind
    let member_service = MemberService::new(&state.db);
    if member_service.get_by_id(id, &scope).await?.is_none() {
        return Err(AppError::NotFound(format!("Member {id} not found")));
    }

    let photo_url = upload::store_photo(multipart, &state.upload_dir).await?;
    member_service.set_photo(id, photo_url.clone(), &scope).await?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "photo_url": photo_url })),
    ))
}
