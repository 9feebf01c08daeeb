use super::*;

/// Tests listing areas under the unrestricted scope.
///
/// Verifies that every area comes back ordered by name.
///
/// Expected: Ok with all areas alphabetically
#[tokio::test]
async fn lists_all_areas_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = AreaRepository::new(db);

    let region = factory::region::create_region(db).await?;
    factory::area::AreaFactory::new(db, region.id)
        .name("Tema")
        .build()
        .await?;
    factory::area::AreaFactory::new(db, region.id)
        .name("Adenta")
        .build()
        .await?;

    let areas = repository.get_all(&Scope::All).await?;

    assert_eq!(areas.len(), 2);
    assert_eq!(areas[0].name, "Adenta");
    assert_eq!(areas[1].name, "Tema");

    Ok(())
}

/// Tests listing areas under an area scope.
///
/// Verifies that only the scoped areas come back.
///
/// Expected: Ok with the single scoped area
#[tokio::test]
async fn area_scope_restricts_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = AreaRepository::new(db);

    let region = factory::region::create_region(db).await?;
    let scoped = factory::area::create_area(db, region.id).await?;
    factory::area::create_area(db, region.id).await?;

    let areas = repository.get_all(&Scope::Areas(vec![scoped.id])).await?;

    assert_eq!(areas.len(), 1);
    assert_eq!(areas[0].id, scoped.id);

    Ok(())
}

/// Tests listing areas under leader and empty scopes.
///
/// Verifies that a Bacenta leader has no area-level visibility at all.
///
/// Expected: Ok with no rows for both scopes
#[tokio::test]
async fn leader_and_nothing_scopes_see_no_areas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = AreaRepository::new(db);

    let leader = factory::user::create_user(db).await?;
    let region = factory::region::create_region(db).await?;
    factory::area::create_area(db, region.id).await?;

    assert!(repository.get_all(&Scope::Leader(leader.id)).await?.is_empty());
    assert!(repository.get_all(&Scope::Nothing).await?.is_empty());

    Ok(())
}
