use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing;

use crate::dto::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No token was supplied with the request.
    ///
    /// Neither the `Authorization: Bearer` header nor the `token` cookie carried
    /// a value. Results in a 401 Unauthorized response.
    #[error("Request carried no authentication token")]
    MissingToken,

    /// The supplied token failed signature or expiry validation.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid or expired authentication token")]
    InvalidToken,

    /// Login attempt with a wrong username/password pair or a deactivated account.
    ///
    /// Deliberately indistinguishable from the client side to avoid leaking
    /// which usernames exist. Results in a 401 Unauthorized response.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// The token was valid but its user no longer exists in the database.
    ///
    /// # Fields
    /// - User id carried in the token's subject claim
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// The authenticated user lacks the role or scope the operation requires.
    ///
    /// Results in a 403 Forbidden response; the detail string is logged, not sent.
    ///
    /// # Fields
    /// - Id of the user who was denied
    /// - Description of what was attempted, for the server log
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-facing
/// error messages:
/// - `MissingToken` / `InvalidToken` / `InvalidCredentials` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// Denials are logged with their server-side detail while keeping client-facing
/// messages generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - For missing/invalid tokens and failed logins
/// - 403 Forbidden - For role or scope violations
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid username or password".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!("Token subject {} no longer exists", user_id);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Authentication required".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AccessDenied(user_id, detail) => {
                tracing::debug!("Access denied for user {}: {}", user_id, detail);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have permission to perform this action".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
