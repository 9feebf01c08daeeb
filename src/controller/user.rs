use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::PaginationQuery,
    data::scope::ScopeResolver,
    dto::user::{CreateUserDto, CreatedUserDto, UpdateUserDto},
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, AuthSession, Permission},
    model::scope::Scope,
    model::user::{role_from_string, CreateUserParam, GetAllUsersParam, UpdateUserParam},
    service::{upload, user::UserService},
    state::AppState,
};

/// GET /api/users - List the leaders visible to the caller
///
/// Bishops see every leader, Governors the leaders of their regions' areas,
/// Area Pastors the leaders of their areas. Bacenta and Ministry leaders get
/// 403; their own profile lives at /api/auth/user.
///
/// # Returns
/// - `200 OK`: Paginated leaders
/// - `403 Forbidden`: Caller has no leader-level visibility
pub async fn get_users(
    State(state): State<AppState>,
    session: AuthSession,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let scope = ScopeResolver::new(&state.db).resolve(&user).await?;

    if matches!(scope, Scope::Leader(_) | Scope::Nothing) {
        return Err(AuthError::AccessDenied(
            user.id,
            "role has no leader-level visibility".to_string(),
        )
        .into());
    }

    let user_service = UserService::new(&state.db);
    let users = user_service
        .get_all(
            GetAllUsersParam {
                page: pagination.page,
                per_page: pagination.per_page,
            },
            &scope,
        )
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// POST /api/users - Create a leader account
///
/// When the payload carries no password, a temporary one is generated and
/// returned exactly once in the response.
///
/// # Returns
/// - `201 Created`: The account, plus the temporary password if generated
/// - `400 Bad Request`: Username taken, unknown role or unknown area
/// - `403 Forbidden`: Caller may not create leaders, or hierarchy rule violated
pub async fn create_user(
    State(state): State<AppState>,
    session: AuthSession,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let creator = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageLeaders])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&creator).await?;

    let role = role_from_string(&payload.role)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown role '{}'", payload.role)))?;

    let user_service = UserService::new(&state.db);
    let (user, temporary_password) = user_service
        .create(
            CreateUserParam {
                username: payload.username,
                password: payload.password,
                full_name: payload.full_name,
                phone: payload.phone,
                role,
                area_id: payload.area_id,
            },
            &creator,
            &scope,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedUserDto {
            user: user.into_dto(),
            temporary_password,
        }),
    ))
}

/// GET /api/users/{id} - Get one leader
///
/// # Returns
/// - `200 OK`: The leader
/// - `404 Not Found`: No such leader, or outside the caller's scope
pub async fn get_user_by_id(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let scope = ScopeResolver::new(&state.db).resolve(&user).await?;

    let user_service = UserService::new(&state.db);
    let found = user_service.get_by_id(id, &scope).await?;

    match found {
        Some(found) => Ok((StatusCode::OK, Json(found.into_dto()))),
        None => Err(AppError::NotFound(format!("User {id} not found"))),
    }
}

/// PUT /api/users/{id} - Update a leader account
///
/// # Returns
/// - `200 OK`: The updated account
/// - `400 Bad Request`: Unknown role or unknown area
/// - `403 Forbidden`: Hierarchy rule violated
/// - `404 Not Found`: No such leader, or outside the caller's scope
pub async fn update_user(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageLeaders])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    let role = role_from_string(&payload.role)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown role '{}'", payload.role)))?;

    let user_service = UserService::new(&state.db);
    let user = user_service
        .update(
            id,
            UpdateUserParam {
                full_name: Some(payload.full_name),
                phone: Some(payload.phone),
                role: Some(role),
                area_id: Some(payload.area_id),
                active: Some(payload.active),
            },
            &caller,
            &scope,
        )
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// POST /api/users/{id}/photo - Upload a leader's profile photo
///
/// Multipart form with a single `photo` field (image/jpeg or image/png).
///
/// # Returns
/// - `200 OK`: Photo stored, URL set on the account
/// - `400 Bad Request`: Missing field, wrong type or empty file
/// - `404 Not Found`: No such leader, or outside the caller's scope
pub async fn upload_user_photo(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageLeaders])
        .await?;
    let scope = ScopeResolver::new(&state.db).resolve(&caller).await?;

    // Check the target before touching the filesystem so a rejected upload
    // leaves no orphan file behind
    let user_service = UserService::new(&state.db);
    if user_service.get_by_id(id, &scope).await?.is_none() {
        return Err(AppError::NotFound(format!("User {id} not found")));
    }

    let photo_url = upload::store_photo(multipart, &state.upload_dir).await?;
    user_service.set_photo(id, photo_url.clone(), &scope).await?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "photo_url": photo_url })),
    ))
}
