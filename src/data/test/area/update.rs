use super::*;

/// Tests renaming an area and reassigning its overseer.
///
/// Expected: Ok with the new name and overseer
#[tokio::test]
async fn updates_name_and_overseer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = AreaRepository::new(db);

    let region = factory::region::create_region(db).await?;
    let area = factory::area::create_area(db, region.id).await?;
    let pastor = factory::user::create_user(db).await?;

    let param = UpdateAreaParam {
        name: Some("Dansoman".to_string()),
        overseer_id: Some(Some(pastor.id)),
    };
    let updated = repository.update(area.id, param).await?;

    assert_eq!(updated.name, "Dansoman");
    assert_eq!(updated.overseer_id, Some(pastor.id));
    assert_eq!(updated.region_id, region.id);

    Ok(())
}

/// Tests clearing an area's overseer through the double Option.
///
/// Expected: Ok with the overseer removed and the name untouched
#[tokio::test]
async fn clears_overseer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = AreaRepository::new(db);

    let pastor = factory::user::create_user(db).await?;
    let region = factory::region::create_region(db).await?;
    let area = factory::area::AreaFactory::new(db, region.id)
        .overseer_id(pastor.id)
        .build()
        .await?;

    let param = UpdateAreaParam {
        overseer_id: Some(None),
        ..Default::default()
    };
    let updated = repository.update(area.id, param).await?;

    assert_eq!(updated.overseer_id, None);
    assert_eq!(updated.name, area.name);

    Ok(())
}

/// Tests updating a missing area.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn returns_error_for_missing_area() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = AreaRepository::new(db);

    let param = UpdateAreaParam {
        name: Some("Ghost".to_string()),
        ..Default::default()
    };
    let result = repository.update(777, param).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
