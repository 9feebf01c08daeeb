use super::*;

/// Tests fetching a member inside the caller's scope.
///
/// Verifies that a Bacenta leader can fetch their own member by id.
///
/// Expected: Ok(Some) with the member
#[tokio::test]
async fn returns_member_inside_scope() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = MemberRepository::new(db);

    let (leader, _region, _area, member) =
        factory::helpers::create_member_with_dependencies(db).await?;

    let found = repository
        .get_by_id(member.id, &Scope::Leader(leader.id))
        .await?;

    assert_eq!(found.map(|m| m.id), Some(member.id));

    Ok(())
}

/// Tests fetching a member outside the caller's scope.
///
/// Verifies that someone else's member is indistinguishable from a missing
/// record.
///
/// Expected: Ok(None)
#[tokio::test]
async fn hides_member_outside_scope() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = MemberRepository::new(db);

    let (_leader, _region, _area, member) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let other_leader = factory::user::create_user(db).await?;

    let found = repository
        .get_by_id(member.id, &Scope::Leader(other_leader.id))
        .await?;

    assert_eq!(found, None);

    Ok(())
}

/// Tests fetching a member by area scope.
///
/// Verifies that an area-scoped caller sees members of their areas and not
/// those of other areas.
///
/// Expected: Ok(Some) inside the area, Ok(None) outside
#[tokio::test]
async fn area_scope_covers_area_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = MemberRepository::new(db);

    let region = factory::region::create_region(db).await?;
    let inside_area = factory::area::create_area(db, region.id).await?;
    let outside_area = factory::area::create_area(db, region.id).await?;
    let inside = factory::member::create_member(db, inside_area.id).await?;
    let outside = factory::member::create_member(db, outside_area.id).await?;

    let scope = Scope::Areas(vec![inside_area.id]);

    assert!(repository.get_by_id(inside.id, &scope).await?.is_some());
    assert!(repository.get_by_id(outside.id, &scope).await?.is_none());

    Ok(())
}

/// Tests fetching a missing member.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = MemberRepository::new(db);

    let found = repository.get_by_id(424242, &Scope::All).await?;

    assert_eq!(found, None);

    Ok(())
}
