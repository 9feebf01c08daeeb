use super::*;

/// Tests adding members to a ministry roster.
///
/// Verifies that added members show up in the roster id list and the
/// membership check.
///
/// Expected: Ok with both member ids on the roster
#[tokio::test]
async fn adds_members_to_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ministry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = MinistryRepository::new(db);

    let (_leader, _region, area, member) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let second = factory::member::create_member(db, area.id).await?;
    let ministry = factory::ministry::create_ministry(db).await?;

    repository.add_member(ministry.id, member.id).await?;
    repository.add_member(ministry.id, second.id).await?;

    let ids = repository.get_member_ids(ministry.id).await?;

    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&member.id));
    assert!(ids.contains(&second.id));
    assert!(repository.member_exists(ministry.id, member.id).await?);

    Ok(())
}

/// Tests removing a member from a roster.
///
/// Verifies that the removal reports one affected row the first time and
/// zero the second.
///
/// Expected: Ok(1) then Ok(0)
#[tokio::test]
async fn removes_member_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ministry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = MinistryRepository::new(db);

    let (_leader, _region, _area, member) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let ministry = factory::ministry::create_ministry(db).await?;
    repository.add_member(ministry.id, member.id).await?;

    assert_eq!(repository.remove_member(ministry.id, member.id).await?, 1);
    assert_eq!(repository.remove_member(ministry.id, member.id).await?, 0);
    assert!(!repository.member_exists(ministry.id, member.id).await?);

    Ok(())
}

/// Tests that rosters are independent across ministries.
///
/// Verifies that membership in one ministry does not leak into another.
///
/// Expected: Ok with the member listed only where added
#[tokio::test]
async fn rosters_are_independent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ministry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = MinistryRepository::new(db);

    let (_leader, _region, _area, member) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let choir = factory::ministry::MinistryFactory::new(db)
        .name("Choir")
        .build()
        .await?;
    let ushers = factory::ministry::MinistryFactory::new(db)
        .name("Ushers")
        .build()
        .await?;

    repository.add_member(choir.id, member.id).await?;

    assert!(repository.member_exists(choir.id, member.id).await?);
    assert!(!repository.member_exists(ushers.id, member.id).await?);
    assert!(repository.get_member_ids(ushers.id).await?.is_empty());

    Ok(())
}
