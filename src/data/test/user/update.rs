use super::*;

/// Tests updating a leader's mutable fields.
///
/// Verifies that name, role and active flag change while untouched fields
/// keep their stored values.
///
/// Expected: Ok with the updated account
#[tokio::test]
async fn updates_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = UserRepository::new(db);

    let user = factory::user::UserFactory::new(db)
        .full_name("Kwesi Appiah")
        .phone("+233244000000")
        .build()
        .await?;

    let param = UpdateUserParam {
        full_name: Some("Kwesi A. Appiah".to_string()),
        role: Some(Role::AreaPastor),
        active: Some(false),
        ..Default::default()
    };
    let updated = repository.update(user.id, param).await?;

    assert_eq!(updated.full_name, "Kwesi A. Appiah");
    assert_eq!(updated.role, Role::AreaPastor);
    assert!(!updated.active);
    assert_eq!(updated.phone, Some("+233244000000".to_string()));
    assert_eq!(updated.username, user.username);

    Ok(())
}

/// Tests clearing nullable fields through the double Option.
///
/// Verifies that passing `Some(None)` removes a stored phone number and area
/// attachment.
///
/// Expected: Ok with both fields cleared
#[tokio::test]
async fn clears_nullable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = UserRepository::new(db);

    let region = factory::region::create_region(db).await?;
    let area = factory::area::create_area(db, region.id).await?;
    let user = factory::user::UserFactory::new(db)
        .phone("+233501112222")
        .area_id(area.id)
        .build()
        .await?;

    let param = UpdateUserParam {
        phone: Some(None),
        area_id: Some(None),
        ..Default::default()
    };
    let updated = repository.update(user.id, param).await?;

    assert_eq!(updated.phone, None);
    assert_eq!(updated.area_id, None);

    Ok(())
}

/// Tests updating a missing account.
///
/// Verifies that an unknown id surfaces as a record-not-found error instead
/// of silently inserting.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn returns_error_for_missing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = UserRepository::new(db);

    let param = UpdateUserParam {
        full_name: Some("Nobody".to_string()),
        ..Default::default()
    };
    let result = repository.update(9999, param).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
