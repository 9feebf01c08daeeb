use axum::extract::FromRequestParts;
use axum::http::Request;

use crate::auth::jwt::{generate_token, JwtConfig};
use crate::middleware::auth::AuthSession;
use crate::state::AppState;

use super::*;

/// Builds an application state over an in-memory database with a known JWT
/// secret, for exercising the extractor end to end.
async fn test_state() -> AppState {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();

    AppState::new(
        test.db.unwrap(),
        JwtConfig {
            secret: "extractor-test-secret-long-enough".to_string(),
            expiry_hours: 12,
        },
        "uploads".into(),
    )
}

/// Tests extraction from the Authorization header.
///
/// Verifies that a valid bearer token yields a session carrying the token's
/// subject and role claims.
///
/// Expected: Ok(AuthSession) with the signed user id
#[tokio::test]
async fn extracts_bearer_token() -> Result<(), AppError> {
    let state = test_state().await;
    let token = generate_token(7, "Bishop", &state.jwt)?;

    let (mut parts, _) = Request::builder()
        .header("authorization", format!("Bearer {token}"))
        .body(())
        .unwrap()
        .into_parts();

    let session = AuthSession::from_request_parts(&mut parts, &state).await?;

    assert_eq!(session.user_id, 7);
    assert_eq!(session.claims.role, "Bishop");

    Ok(())
}

/// Tests extraction from the token cookie.
///
/// Verifies that the `token` cookie is accepted when no Authorization header
/// is present, including when other cookies surround it.
///
/// Expected: Ok(AuthSession) with the signed user id
#[tokio::test]
async fn extracts_cookie_token() -> Result<(), AppError> {
    let state = test_state().await;
    let token = generate_token(3, "Governor", &state.jwt)?;

    let (mut parts, _) = Request::builder()
        .header("cookie", format!("theme=dark; token={token}; lang=en"))
        .body(())
        .unwrap()
        .into_parts();

    let session = AuthSession::from_request_parts(&mut parts, &state).await?;

    assert_eq!(session.user_id, 3);

    Ok(())
}

/// Tests a request with no token at all.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() {
    let state = test_state().await;

    let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();

    let result = AuthSession::from_request_parts(&mut parts, &state).await;

    match result {
        Err(AppError::AuthErr(AuthError::MissingToken)) => {}
        other => panic!("expected MissingToken, got {other:?}"),
    }
}

/// Tests a request with a malformed bearer value.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_garbage_token() {
    let state = test_state().await;

    let (mut parts, _) = Request::builder()
        .header("authorization", "Bearer not-a-jwt")
        .body(())
        .unwrap()
        .into_parts();

    let result = AuthSession::from_request_parts(&mut parts, &state).await;

    match result {
        Err(AppError::AuthErr(AuthError::InvalidToken)) => {}
        other => panic!("expected InvalidToken, got {other:?}"),
    }
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_signature() {
    let state = test_state().await;
    let foreign = JwtConfig {
        secret: "some-other-secret-entirely".to_string(),
        expiry_hours: 12,
    };
    let token = generate_token(7, "Bishop", &foreign).unwrap();

    let (mut parts, _) = Request::builder()
        .header("authorization", format!("Bearer {token}"))
        .body(())
        .unwrap()
        .into_parts();

    let result = AuthSession::from_request_parts(&mut parts, &state).await;

    match result {
        Err(AppError::AuthErr(AuthError::InvalidToken)) => {}
        other => panic!("expected InvalidToken, got {other:?}"),
    }
}
