use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::auth::{ChangePasswordDto, LoginDto, LoginResponseDto},
    error::AppError,
    middleware::auth::{AuthGuard, AuthSession, TOKEN_COOKIE},
    model::user::User,
    service::auth::AuthService,
    state::AppState,
};

/// POST /api/auth/login - Exchange credentials for a token
///
/// Verifies the username/password pair and returns a signed JWT both in the
/// body and as an HttpOnly cookie. Bad credentials and deactivated accounts
/// produce the same 401 so usernames are never confirmed.
///
/// # Returns
/// - `200 OK`: Token and user profile, plus Set-Cookie
/// - `401 Unauthorized`: Bad credentials or inactive account
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db);

    let (token, user) = auth_service
        .login(&payload.username, &payload.password, &state.jwt)
        .await?;

    let cookie = format!(
        "{TOKEN_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        state.jwt.expiry_hours * 3600
    );

    Ok((
        StatusCode::OK,
        [(SET_COOKIE, cookie)],
        Json(LoginResponseDto {
            token,
            user: user.into_dto(),
        }),
    ))
}

/// POST /api/auth/logout - Clear the token cookie
///
/// Stateless tokens cannot be revoked server-side; logout simply expires the
/// cookie so browser clients drop it.
///
/// # Returns
/// - `200 OK`: Cookie cleared
pub async fn logout() -> impl IntoResponse {
    let cookie = format!("{TOKEN_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");

    (StatusCode::OK, [(SET_COOKIE, cookie)])
}

/// GET /api/auth/user - Get the authenticated leader's profile
///
/// # Returns
/// - `200 OK`: Current user profile
/// - `401 Unauthorized`: Missing or invalid token, or account no longer valid
pub async fn get_current_user(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(User::from_entity(user).into_dto())))
}

/// PUT /api/auth/password - Change the authenticated leader's password
///
/// # Returns
/// - `200 OK`: Password replaced
/// - `400 Bad Request`: New password too weak
/// - `401 Unauthorized`: Current password wrong
pub async fn change_password(
    State(state): State<AppState>,
    session: AuthSession,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let auth_service = AuthService::new(&state.db);
    auth_service
        .change_password(user.id, &payload.current_password, &payload.new_password)
        .await?;

    Ok(StatusCode::OK)
}
