use super::*;

use entity::user::Role;

mod require_manage_leaders;
mod require_manage_regions;
mod require_pastoral;

/// Tests the empty permission list.
///
/// Verifies that an authenticated, active user passes a guard that requires
/// no specific permissions.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let result = AuthGuard::for_user(db, user.id).require(&[]).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, user.id);

    Ok(())
}

/// Tests a token subject that no longer exists.
///
/// Verifies that the guard rejects a user id with no matching database row,
/// which happens when an account is deleted while its token is still valid.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_access_when_user_not_in_database() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthGuard::for_user(db, 424242).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(user_id))) => {
            assert_eq!(user_id, 424242);
        }
        other => panic!("expected UserNotInDatabase, got {other:?}"),
    }

    Ok(())
}

/// Tests a deactivated account.
///
/// Verifies that the guard rejects an inactive account even with an empty
/// permission list, so deactivation cuts off access before token expiry.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_deactivated_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .role(Role::Bishop)
        .active(false)
        .build()
        .await?;

    let result = AuthGuard::for_user(db, user.id).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, detail))) => {
            assert_eq!(user_id, user.id);
            assert!(detail.contains("deactivated"));
        }
        other => panic!("expected AccessDenied, got {other:?}"),
    }

    Ok(())
}

/// Tests that every permission in the list must be held.
///
/// Verifies that a Governor passes ManageAreas alone but fails when
/// ManageRegions is also required.
///
/// Expected: Ok then Err(AuthError::AccessDenied)
#[tokio::test]
async fn requires_all_listed_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let governor = factory::user::create_user_with_role(db, Role::Governor).await?;

    let guard = AuthGuard::for_user(db, governor.id);

    assert!(guard.require(&[Permission::ManageAreas]).await.is_ok());

    let result = guard
        .require(&[Permission::ManageAreas, Permission::ManageRegions])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, detail))) => {
            assert_eq!(user_id, governor.id);
            assert!(detail.contains("ManageRegions"));
        }
        other => panic!("expected AccessDenied, got {other:?}"),
    }

    Ok(())
}
