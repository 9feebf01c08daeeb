use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    dto::api::ErrorDto,
    dto::region::{CreateRegionDto, RegionDto, UpdateRegionDto},
    error::AppError,
    middleware::auth::{AuthGuard, AuthSession, Permission},
    model::region::{CreateRegionParam, UpdateRegionParam},
    service::region::RegionService,
    state::AppState,
};

/// Tag for grouping region endpoints in OpenAPI documentation
pub static REGION_TAG: &str = "region";

/// Create a new region.
///
/// Regions are the top of the hierarchy; only the Bishop creates them. An
/// optional governor assignment is validated against the Governor role.
///
/// # Access Control
/// - `ManageRegions` - Bishop only
///
/// # Returns
/// - `201 Created` - The created region
/// - `400 Bad Request` - Name taken, or the assignee is not a Governor
/// - `403 Forbidden` - Caller is not the Bishop
#[utoipa::path(
    post,
    path = "/api/regions",
    tag = REGION_TAG,
    request_body = CreateRegionDto,
    responses(
        (status = 201, description = "Successfully created region", body = RegionDto),
        (status = 400, description = "Name taken or invalid governor", body = ErrorDto),
        (status = 403, description = "Caller is not the Bishop", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_region(
    State(state): State<AppState>,
    session: AuthSession,
    Json(payload): Json<CreateRegionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageRegions])
        .await?;

    let region_service = RegionService::new(&state.db);
    let region = region_service
        .create(CreateRegionParam {
            name: payload.name,
            governor_id: payload.governor_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(region.into_dto())))
}

/// Get the regions visible to the caller.
///
/// The Bishop sees every region; a Governor sees the regions assigned to
/// them; everyone else gets an empty list.
///
/// # Returns
/// - `200 OK` - Visible regions
#[utoipa::path(
    get,
    path = "/api/regions",
    tag = REGION_TAG,
    responses(
        (status = 200, description = "Successfully retrieved regions", body = Vec<RegionDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_regions(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let region_service = RegionService::new(&state.db);
    let regions = region_service.get_all(&caller).await?;

    Ok((
        StatusCode::OK,
        Json(
            regions
                .into_iter()
                .map(|r| r.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a specific region by ID.
///
/// # Returns
/// - `200 OK` - The region
/// - `404 Not Found` - No such region, or outside the caller's view
#[utoipa::path(
    get,
    path = "/api/regions/{id}",
    tag = REGION_TAG,
    params(
        ("id" = i32, Path, description = "Region ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved region", body = RegionDto),
        (status = 404, description = "Region not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_region_by_id(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let region_service = RegionService::new(&state.db);
    let region = region_service.get_by_id(id, &caller).await?;

    match region {
        Some(region) => Ok((StatusCode::OK, Json(region.into_dto()))),
        None => Err(AppError::NotFound(format!("Region {id} not found"))),
    }
}

/// Update a region.
///
/// # Access Control
/// - `ManageRegions` - Bishop only
///
/// # Returns
/// - `200 OK` - The updated region
/// - `400 Bad Request` - Name taken, or the assignee is not a Governor
/// - `404 Not Found` - No such region
#[utoipa::path(
    put,
    path = "/api/regions/{id}",
    tag = REGION_TAG,
    params(
        ("id" = i32, Path, description = "Region ID")
    ),
    request_body = UpdateRegionDto,
    responses(
        (status = 200, description = "Successfully updated region", body = RegionDto),
        (status = 400, description = "Name taken or invalid governor", body = ErrorDto),
        (status = 403, description = "Caller is not the Bishop", body = ErrorDto),
        (status = 404, description = "Region not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_region(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRegionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageRegions])
        .await?;

    let region_service = RegionService::new(&state.db);
    let region = region_service
        .update(
            id,
            UpdateRegionParam {
                name: Some(payload.name),
                governor_id: Some(payload.governor_id),
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(region.into_dto())))
}

/// Delete a region.
///
/// Deletion is blocked while areas still hang off the region.
///
/// # Access Control
/// - `ManageRegions` - Bishop only
///
/// # Returns
/// - `204 No Content` - Region deleted
/// - `400 Bad Request` - Areas still attached
/// - `404 Not Found` - No such region
#[utoipa::path(
    delete,
    path = "/api/regions/{id}",
    tag = REGION_TAG,
    params(
        ("id" = i32, Path, description = "Region ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted region"),
        (status = 400, description = "Areas still attached", body = ErrorDto),
        (status = 403, description = "Caller is not the Bishop", body = ErrorDto),
        (status = 404, description = "Region not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_region(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageRegions])
        .await?;

    let region_service = RegionService::new(&state.db);
    region_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
