use super::*;

/// Tests paginated listing under the unrestricted scope.
///
/// Verifies that every account is counted, pages respect the requested size
/// and rows come back ordered by full name.
///
/// Expected: Ok with the first page of two and a total of three
#[tokio::test]
async fn pages_and_orders_by_full_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = UserRepository::new(db);

    factory::user::UserFactory::new(db)
        .full_name("Yaw Darko")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .full_name("Abena Sarpong")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .full_name("Kofi Boateng")
        .build()
        .await?;

    let param = GetAllUsersParam {
        page: 0,
        per_page: 2,
    };
    let (users, total) = repository.get_all_paginated(param, &Scope::All).await?;

    assert_eq!(total, 3);
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].full_name, "Abena Sarpong");
    assert_eq!(users[1].full_name, "Kofi Boateng");

    Ok(())
}

/// Tests paginated listing under an area scope.
///
/// Verifies that only leaders attached to the scoped areas are returned and
/// leaders elsewhere are invisible.
///
/// Expected: Ok with just the leader in the scoped area
#[tokio::test]
async fn area_scope_hides_other_leaders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = UserRepository::new(db);

    let region = factory::region::create_region(db).await?;
    let inside_area = factory::area::create_area(db, region.id).await?;
    let outside_area = factory::area::create_area(db, region.id).await?;

    let visible = factory::user::UserFactory::new(db)
        .area_id(inside_area.id)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .area_id(outside_area.id)
        .build()
        .await?;
    factory::user::create_user(db).await?;

    let param = GetAllUsersParam {
        page: 0,
        per_page: 10,
    };
    let scope = Scope::Areas(vec![inside_area.id]);
    let (users, total) = repository.get_all_paginated(param, &scope).await?;

    assert_eq!(total, 1);
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, visible.id);

    Ok(())
}

/// Tests paginated listing under a leader scope.
///
/// Verifies that a Bacenta leader sees exactly their own account.
///
/// Expected: Ok with a single row holding the leader's id
#[tokio::test]
async fn leader_scope_returns_own_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = UserRepository::new(db);

    let leader = factory::user::create_user(db).await?;
    factory::user::create_user(db).await?;

    let param = GetAllUsersParam {
        page: 0,
        per_page: 10,
    };
    let scope = Scope::Leader(leader.id);
    let (users, total) = repository.get_all_paginated(param, &scope).await?;

    assert_eq!(total, 1);
    assert_eq!(users[0].id, leader.id);

    Ok(())
}

/// Tests paginated listing under the empty scope.
///
/// Verifies that a caller with no congregation visibility gets an empty page
/// rather than an error.
///
/// Expected: Ok with no rows and a total of zero
#[tokio::test]
async fn nothing_scope_returns_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = UserRepository::new(db);

    factory::user::create_user(db).await?;

    let param = GetAllUsersParam {
        page: 0,
        per_page: 10,
    };
    let (users, total) = repository
        .get_all_paginated(param, &Scope::Nothing)
        .await?;

    assert_eq!(total, 0);
    assert!(users.is_empty());

    Ok(())
}
