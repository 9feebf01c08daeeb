use super::*;

/// Tests that all pastoral roles hold the Pastoral permission.
///
/// Expected: Ok(User) for Bishop, Governor, Area_Pastor and Bacenta_Leader
#[tokio::test]
async fn grants_pastoral_to_pastoral_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for role in [
        Role::Bishop,
        Role::Governor,
        Role::AreaPastor,
        Role::BacentaLeader,
    ] {
        let user = factory::user::create_user_with_role(db, role.clone()).await?;

        let result = AuthGuard::for_user(db, user.id)
            .require(&[Permission::Pastoral])
            .await;

        assert!(result.is_ok(), "{role:?} should hold Pastoral");
    }

    Ok(())
}

/// Tests that a Ministry leader is denied the Pastoral permission.
///
/// Ministry leaders reach their data through the ministry endpoints; they
/// have no standing in member or attendance operations.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_pastoral_to_ministry_leader() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let leader = factory::user::create_user_with_role(db, Role::MinistryLeader).await?;

    let result = AuthGuard::for_user(db, leader.id)
        .require(&[Permission::Pastoral])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, detail))) => {
            assert_eq!(user_id, leader.id);
            assert!(detail.contains("Pastoral"));
        }
        other => panic!("expected AccessDenied, got {other:?}"),
    }

    Ok(())
}
