use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::scope::ScopeResolver,
    dto::api::ErrorDto,
    dto::area::{AreaDto, CreateAreaDto, UpdateAreaDto},
    error::AppError,
    middleware::auth::{AuthGuard, AuthSession, Permission},
    model::area::{CreateAreaParam, UpdateAreaParam},
    service::area::AreaService,
    state::AppState,
};

/// Tag for grouping area endpoints in OpenAPI documentation
pub static AREA_TAG: &str = "area";

/// Create a new area.
///
/// A Governor may only create areas inside the regions they govern. An
/// optional overseer assignment is validated against the Area_Pastor role.
///
/// # Access Control
/// - `ManageAreas` - Bishop or Governor
///
/// # Returns
/// - `201 Created` - The created area
/// - `400 Bad Request` - Unknown region or invalid overseer
/// - `403 Forbidden` - Governor creating outside their regions
#[utoipa::path(
    post,
    path = "/api/areas",
    tag = AREA_TAG,
    request_body = CreateAreaDto,
    responses(
        (status = 201, description = "Successfully created area", body = AreaDto),
        (status = 400, description = "Unknown region or invalid overseer", body = ErrorDto),
        (status = 403, description = "Region outside the caller's governance", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_area(
    State(state): State<AppState>,
    session: AuthSession,
    Json(payload): Json<CreateAreaDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageAreas])
        .await?;

    let area_service = AreaService::new(&state.db);
    let area = area_service
        .create(
            CreateAreaParam {
                name: payload.name,
                region_id: payload.region_id,
                overseer_id: payload.overseer_id,
            },
            &caller,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(area.into_dto())))
}

/// Get the areas visible to the caller, ordered by name.
///
/// # Returns
/// - `200 OK` - Areas in the caller's scope (possibly empty)
#[utoipa::path(
    get,
    path = "/api/areas",
    tag = AREA_TAG,
    responses(
        (status = 200, description = "Successfully retrieved areas", body = Vec<AreaDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_areas(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    let area_service = AreaService::new(&state.db);
    let areas = area_service.get_all(&scope).await?;

    Ok((
        StatusCode::OK,
        Json(areas.into_iter().map(|a| a.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a specific area by ID.
///
/// # Returns
/// - `200 OK` - The area
/// - `404 Not Found` - No such area, or outside the caller's scope
#[utoipa::path(
    get,
    path = "/api/areas/{id}",
    tag = AREA_TAG,
    params(
        ("id" = i32, Path, description = "Area ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved area", body = AreaDto),
        (status = 404, description = "Area not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_area_by_id(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    let area_service = AreaService::new(&state.db);
    let area = area_service.get_by_id(id, &scope).await?;

    match area {
        Some(area) => Ok((StatusCode::OK, Json(area.into_dto()))),
        None => Err(AppError::NotFound(format!("Area {id} not found"))),
    }
}

/// Update an area.
///
/// # Access Control
/// - `ManageAreas` - Bishop or Governor-of-that-region
///
/// # Returns
/// - `200 OK` - The updated area
/// - `400 Bad Request` - Invalid overseer
/// - `404 Not Found` - No such area, or outside the caller's scope
#[utoipa::path(
    put,
    path = "/api/areas/{id}",
    tag = AREA_TAG,
    params(
        ("id" = i32, Path, description = "Area ID")
    ),
    request_body = UpdateAreaDto,
    responses(
        (status = 200, description = "Successfully updated area", body = AreaDto),
        (status = 400, description = "Invalid overseer", body = ErrorDto),
        (status = 404, description = "Area not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_area(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAreaDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageAreas])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    let area_service = AreaService::new(&state.db);
    let area = area_service
        .update(
            id,
            UpdateAreaParam {
                name: Some(payload.name),
                overseer_id: Some(payload.overseer_id),
            },
            &scope,
        )
        .await?;

    Ok((StatusCode::OK, Json(area.into_dto())))
}

/// Delete an area.
///
/// Deletion is blocked while members still belong to the area.
///
/// # Access Control
/// - `ManageAreas` - Bishop or Governor-of-that-region
///
/// # Returns
/// - `204 No Content` - Area deleted
/// - `400 Bad Request` - Members still attached
/// - `404 Not Found` - No such area, or outside the caller's scope
#[utoipa::path(
    delete,
    path = "/api/areas/{id}",
    tag = AREA_TAG,
    params(
        ("id" = i32, Path, description = "Area ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted area"),
        (status = 400, description = "Members still attached", body = ErrorDto),
        (status = 404, description = "Area not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_area(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageAreas])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    let area_service = AreaService::new(&state.db);
    area_service.delete(id, &scope).await?;

    Ok(StatusCode::NO_CONTENT)
}
