use super::*;

/// Tests that a Bishop holds ManageRegions.
///
/// Expected: Ok(User) with the Bishop role
#[tokio::test]
async fn grants_manage_regions_to_bishop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bishop = factory::user::create_user_with_role(db, Role::Bishop).await?;

    let result = AuthGuard::for_user(db, bishop.id)
        .require(&[Permission::ManageRegions])
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().role, Role::Bishop);

    Ok(())
}

/// Tests that every non-Bishop role is denied ManageRegions.
///
/// Expected: Err(AuthError::AccessDenied) for each role
#[tokio::test]
async fn denies_manage_regions_to_other_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for role in [
        Role::Governor,
        Role::AreaPastor,
        Role::BacentaLeader,
        Role::MinistryLeader,
    ] {
        let user = factory::user::create_user_with_role(db, role).await?;

        let result = AuthGuard::for_user(db, user.id)
            .require(&[Permission::ManageRegions])
            .await;

        match result {
            Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
                assert_eq!(user_id, user.id);
            }
            other => panic!("expected AccessDenied, got {other:?}"),
        }
    }

    Ok(())
}
