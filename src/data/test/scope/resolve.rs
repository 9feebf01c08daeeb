use super::*;

/// Tests scope resolution for a Bishop.
///
/// Verifies that a Bishop resolves to the unrestricted scope regardless of
/// the hierarchy contents.
///
/// Expected: Ok with Scope::All
#[tokio::test]
async fn bishop_resolves_to_all() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bishop = factory::user::create_user_with_role(db, Role::Bishop).await?;

    let resolver = ScopeResolver::new(db);
    let scope = resolver.resolve(&bishop).await?;

    assert_eq!(scope, Scope::All);

    Ok(())
}

/// Tests scope resolution for a Governor over two regions.
///
/// Verifies that the resolved scope contains every area of every region the
/// Governor governs, and nothing else.
///
/// Expected: Ok with Scope::Areas holding the three governed area ids
#[tokio::test]
async fn governor_resolves_to_region_areas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let governor = factory::user::create_user_with_role(db, Role::Governor).await?;

    let region_a = factory::region::RegionFactory::new(db)
        .governor_id(governor.id)
        .build()
        .await?;
    let region_b = factory::region::RegionFactory::new(db)
        .governor_id(governor.id)
        .build()
        .await?;
    let other_region = factory::region::create_region(db).await?;

    let area_1 = factory::area::create_area(db, region_a.id).await?;
    let area_2 = factory::area::create_area(db, region_a.id).await?;
    let area_3 = factory::area::create_area(db, region_b.id).await?;
    let outside = factory::area::create_area(db, other_region.id).await?;

    let resolver = ScopeResolver::new(db);
    let scope = resolver.resolve(&governor).await?;

    match scope {
        Scope::Areas(ids) => {
            assert_eq!(ids.len(), 3);
            assert!(ids.contains(&area_1.id));
            assert!(ids.contains(&area_2.id));
            assert!(ids.contains(&area_3.id));
            assert!(!ids.contains(&outside.id));
        }
        other => panic!("expected Areas scope, got {other:?}"),
    }

    Ok(())
}

/// Tests scope resolution for a Governor with no regions.
///
/// Verifies that a Governor not yet assigned any region resolves to an empty
/// area list rather than an error.
///
/// Expected: Ok with Scope::Areas(vec![])
#[tokio::test]
async fn governor_without_regions_resolves_to_empty_areas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let governor = factory::user::create_user_with_role(db, Role::Governor).await?;

    let resolver = ScopeResolver::new(db);
    let scope = resolver.resolve(&governor).await?;

    assert_eq!(scope, Scope::Areas(vec![]));

    Ok(())
}

/// Tests scope resolution for an Area Pastor.
///
/// Verifies that the resolved scope contains exactly the areas with the
/// pastor as overseer.
///
/// Expected: Ok with Scope::Areas holding the overseen area ids
#[tokio::test]
async fn area_pastor_resolves_to_overseen_areas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pastor = factory::user::create_user_with_role(db, Role::AreaPastor).await?;
    let region = factory::region::create_region(db).await?;

    let overseen = factory::area::AreaFactory::new(db, region.id)
        .overseer_id(pastor.id)
        .build()
        .await?;
    let outside = factory::area::create_area(db, region.id).await?;

    let resolver = ScopeResolver::new(db);
    let scope = resolver.resolve(&pastor).await?;

    match scope {
        Scope::Areas(ids) => {
            assert_eq!(ids, vec![overseen.id]);
            assert!(!ids.contains(&outside.id));
        }
        other => panic!("expected Areas scope, got {other:?}"),
    }

    Ok(())
}

/// Tests scope resolution for a Bacenta leader.
///
/// Verifies that a Bacenta leader resolves to their own leader scope without
/// touching the database hierarchy.
///
/// Expected: Ok with Scope::Leader(user id)
#[tokio::test]
async fn bacenta_leader_resolves_to_leader_scope() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let leader = factory::user::create_user_with_role(db, Role::BacentaLeader).await?;

    let resolver = ScopeResolver::new(db);
    let scope = resolver.resolve(&leader).await?;

    assert_eq!(scope, Scope::Leader(leader.id));

    Ok(())
}

/// Tests scope resolution for a Ministry leader.
///
/// Verifies that a Ministry leader resolves to no congregation visibility;
/// their access runs through the ministry endpoints instead.
///
/// Expected: Ok with Scope::Nothing
#[tokio::test]
async fn ministry_leader_resolves_to_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let leader = factory::user::create_user_with_role(db, Role::MinistryLeader).await?;

    let resolver = ScopeResolver::new(db);
    let scope = resolver.resolve(&leader).await?;

    assert_eq!(scope, Scope::Nothing);

    Ok(())
}
