use super::*;

/// Tests updating a member's mutable fields.
///
/// Verifies that provided fields change and untouched fields keep their
/// stored values.
///
/// Expected: Ok with the updated member
#[tokio::test]
async fn updates_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = MemberRepository::new(db);

    let region = factory::region::create_region(db).await?;
    let area = factory::area::create_area(db, region.id).await?;
    let other_area = factory::area::create_area(db, region.id).await?;
    let member = factory::member::MemberFactory::new(db, area.id)
        .first_name("Efua")
        .last_name("Sutherland")
        .build()
        .await?;

    let param = UpdateMemberParam {
        first_name: Some("Efua T.".to_string()),
        area_id: Some(other_area.id),
        state: Some(MemberState::Deer),
        ..Default::default()
    };
    let updated = repository.update(member.id, param).await?;

    assert_eq!(updated.first_name, "Efua T.");
    assert_eq!(updated.last_name, "Sutherland");
    assert_eq!(updated.area_id, other_area.id);
    assert_eq!(updated.state, MemberState::Deer);
    assert_eq!(updated.joined_on, member.joined_on);

    Ok(())
}

/// Tests clearing nullable fields through the double Option.
///
/// Verifies that passing `Some(None)` removes a stored phone, residence and
/// leader assignment.
///
/// Expected: Ok with the three fields cleared
#[tokio::test]
async fn clears_nullable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = MemberRepository::new(db);

    let (_leader, _region, area, _member) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let leader = factory::user::create_user(db).await?;
    let member = factory::member::MemberFactory::new(db, area.id)
        .phone("+233266554433")
        .residence("Kaneshie")
        .leader_id(leader.id)
        .build()
        .await?;

    let param = UpdateMemberParam {
        phone: Some(None),
        residence: Some(None),
        leader_id: Some(None),
        ..Default::default()
    };
    let updated = repository.update(member.id, param).await?;

    assert_eq!(updated.phone, None);
    assert_eq!(updated.residence, None);
    assert_eq!(updated.leader_id, None);

    Ok(())
}

/// Tests updating a missing member.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn returns_error_for_missing_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = MemberRepository::new(db);

    let param = UpdateMemberParam {
        first_name: Some("Nobody".to_string()),
        ..Default::default()
    };
    let result = repository.update(9999, param).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
