use super::*;

/// Tests that Bishops and Governors hold ManageLeaders.
///
/// Expected: Ok(User) for both roles
#[tokio::test]
async fn grants_manage_leaders_to_bishop_and_governor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for role in [Role::Bishop, Role::Governor] {
        let user = factory::user::create_user_with_role(db, role.clone()).await?;

        let result = AuthGuard::for_user(db, user.id)
            .require(&[Permission::ManageLeaders])
            .await;

        assert!(result.is_ok(), "{role:?} should hold ManageLeaders");
    }

    Ok(())
}

/// Tests that the lower roles are denied ManageLeaders.
///
/// Expected: Err(AuthError::AccessDenied) for each role
#[tokio::test]
async fn denies_manage_leaders_to_lower_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for role in [Role::AreaPastor, Role::BacentaLeader, Role::MinistryLeader] {
        let user = factory::user::create_user_with_role(db, role.clone()).await?;

        let result = AuthGuard::for_user(db, user.id)
            .require(&[Permission::ManageLeaders])
            .await;

        assert!(result.is_err(), "{role:?} should lack ManageLeaders");
    }

    Ok(())
}
