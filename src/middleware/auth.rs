//! JWT authentication extractor and role-based authorization guard.
//!
//! Authentication happens in two steps. The [`AuthSession`] extractor runs in
//! every protected handler and validates the token carried in either the
//! `Authorization: Bearer` header or the `token` cookie. The [`AuthGuard`] then
//! re-reads the user row from the database and checks role permissions, so role
//! changes and deactivations take effect on the next request rather than at
//! token expiry -- tokens carry identity, not authority.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sea_orm::DatabaseConnection;

use crate::auth::jwt::{validate_token, Claims};
use crate::data::user::UserRepository;
use crate::error::{auth::AuthError, AppError};
use crate::state::AppState;

use entity::user::Role;

/// Name of the cookie that may carry the token instead of the header.
pub static TOKEN_COOKIE: &str = "token";

/// Validated token claims extracted from an authenticated request.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication. Extraction fails with 401 when no token is present or the
/// token does not validate; it does not touch the database.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// The authenticated user's database id (from `claims.sub`).
    pub user_id: i32,
    /// The full validated claims.
    pub claims: Claims,
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .or_else(|| cookie_token(parts))
            .ok_or(AuthError::MissingToken)?;

        let claims =
            validate_token(&token, &state.jwt).map_err(|_| AuthError::InvalidToken)?;

        Ok(AuthSession {
            user_id: claims.sub,
            claims,
        })
    }
}

/// Token from the `Authorization: Bearer <token>` header, if present.
fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

/// Token from the `token` cookie, if present.
fn cookie_token(parts: &Parts) -> Option<String> {
    let cookies = parts.headers.get("cookie").and_then(|v| v.to_str().ok())?;

    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix("token="))
        .map(str::to_string)
}

/// Route-level permissions checked by [`AuthGuard::require`].
///
/// Each permission names an operation family and maps to the set of roles
/// allowed to perform it. Scope checks (which rows inside the family the
/// caller may touch) happen separately in the service layer.
pub enum Permission {
    /// Create, update or delete regions. Bishop only.
    ManageRegions,
    /// Create, update or delete areas. Bishop or Governor.
    ManageAreas,
    /// Create or update leader accounts. Bishop or Governor.
    ManageLeaders,
    /// Create ministries and manage rosters. Bishop only; per-ministry leaders
    /// are additionally allowed by the service layer where noted.
    ManageMinistries,
    /// Send notifications to other leaders. Bishop or Governor.
    SendNotifications,
    /// Initiate a sync run. Bishop only.
    RunSync,
    /// Member, attendance, call and bacenta operations. Any pastoral role:
    /// Bishop, Governor, Area_Pastor or Bacenta_Leader.
    Pastoral,
}

impl Permission {
    /// Whether the given role holds this permission.
    fn held_by(&self, role: &Role) -> bool {
        match self {
            Permission::ManageRegions | Permission::ManageMinistries | Permission::RunSync => {
                matches!(role, Role::Bishop)
            }
            Permission::ManageAreas
            | Permission::ManageLeaders
            | Permission::SendNotifications => {
                matches!(role, Role::Bishop | Role::Governor)
            }
            Permission::Pastoral => matches!(
                role,
                Role::Bishop | Role::Governor | Role::AreaPastor | Role::BacentaLeader
            ),
        }
    }

    /// Short name used in access-denied log lines.
    fn name(&self) -> &'static str {
        match self {
            Permission::ManageRegions => "ManageRegions",
            Permission::ManageAreas => "ManageAreas",
            Permission::ManageLeaders => "ManageLeaders",
            Permission::ManageMinistries => "ManageMinistries",
            Permission::SendNotifications => "SendNotifications",
            Permission::RunSync => "RunSync",
            Permission::Pastoral => "Pastoral",
        }
    }
}

/// Per-request authorization guard.
///
/// Looks the authenticated user up in the database and verifies the required
/// permissions against their current role. Returns the fresh user row so
/// handlers never act on stale token data.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &AuthSession) -> Self {
        Self {
            db,
            user_id: session.user_id,
        }
    }

    /// Builds a guard from a raw user id. Test and service-internal use.
    pub fn for_user(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self { db, user_id }
    }

    /// Loads the user and checks that they hold every listed permission.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the operation requires (may be empty for
    ///   authenticated-only endpoints)
    ///
    /// # Returns
    /// - `Ok(Model)` - The current user row
    /// - `Err(AuthError::UserNotInDatabase)` - Token subject no longer exists
    /// - `Err(AuthError::AccessDenied)` - Account deactivated or role lacks a
    ///   required permission
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_entity_by_id(self.user_id).await? else {
            return Err(AuthError::UserNotInDatabase(self.user_id).into());
        };

        if !user.active {
            return Err(AuthError::AccessDenied(
                self.user_id,
                "account is deactivated".to_string(),
            )
            .into());
        }

        for permission in permissions {
            if !permission.held_by(&user.role) {
                return Err(AuthError::AccessDenied(
                    self.user_id,
                    format!(
                        "role {:?} lacks the {} permission",
                        user.role,
                        permission.name()
                    ),
                )
                .into());
            }
        }

        Ok(user)
    }
}
