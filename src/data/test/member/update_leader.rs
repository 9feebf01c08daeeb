use super::*;

/// Tests reassigning a member to another leader.
///
/// Verifies that the member moves into the receiving leader's scope and out
/// of the old one.
///
/// Expected: Ok with the member visible to the new leader only
#[tokio::test]
async fn moves_member_between_leaders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = MemberRepository::new(db);

    let (old_leader, _region, _area, member) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let new_leader = factory::user::create_user(db).await?;

    repository.update_leader(member.id, new_leader.id).await?;

    let from_new = repository
        .get_by_id(member.id, &Scope::Leader(new_leader.id))
        .await?;
    let from_old = repository
        .get_by_id(member.id, &Scope::Leader(old_leader.id))
        .await?;

    assert!(from_new.is_some());
    assert!(from_old.is_none());

    Ok(())
}

/// Tests the scoped member count after a reassignment.
///
/// Verifies that count_in_scope follows the leader assignment.
///
/// Expected: Ok with counts of 2 and 0
#[tokio::test]
async fn count_follows_reassignment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = MemberRepository::new(db);

    let (leader, _region, area, _member) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let stray = factory::member::create_member(db, area.id).await?;

    repository.update_leader(stray.id, leader.id).await?;

    assert_eq!(
        repository.count_in_scope(&Scope::Leader(leader.id)).await?,
        2
    );
    assert_eq!(repository.count_in_scope(&Scope::Nothing).await?, 0);

    Ok(())
}
