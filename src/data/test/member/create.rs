use super::*;

/// Tests creating a member record.
///
/// Verifies that all provided fields are stored and the photo starts out
/// empty.
///
/// Expected: Ok with the created member
#[tokio::test]
async fn creates_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = MemberRepository::new(db);

    let leader = factory::user::create_user(db).await?;
    let region = factory::region::create_region(db).await?;
    let area = factory::area::create_area(db, region.id).await?;

    let param = CreateMemberParam {
        first_name: "Akua".to_string(),
        last_name: "Mansa".to_string(),
        phone: Some("+233209876543".to_string()),
        residence: Some("Madina, near the station".to_string()),
        area_id: area.id,
        leader_id: Some(leader.id),
        state: MemberState::Sheep,
        joined_on: NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
    };

    let member = repository.create(param).await?;

    assert_eq!(member.first_name, "Akua");
    assert_eq!(member.last_name, "Mansa");
    assert_eq!(member.area_id, area.id);
    assert_eq!(member.leader_id, Some(leader.id));
    assert_eq!(member.state, MemberState::Sheep);
    assert_eq!(member.joined_on, NaiveDate::from_ymd_opt(2025, 3, 2).unwrap());
    assert_eq!(member.photo_url, None);

    Ok(())
}

/// Tests creating a member without a leader assignment.
///
/// Verifies that the shepherding leader stays unassigned until a transfer
/// fills it in.
///
/// Expected: Ok with leader_id None
#[tokio::test]
async fn creates_member_without_leader() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = MemberRepository::new(db);

    let region = factory::region::create_region(db).await?;
    let area = factory::area::create_area(db, region.id).await?;

    let param = CreateMemberParam {
        first_name: "Yaa".to_string(),
        last_name: "Asantewaa".to_string(),
        phone: None,
        residence: None,
        area_id: area.id,
        leader_id: None,
        state: MemberState::Sheep,
        joined_on: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
    };

    let member = repository.create(param).await?;

    assert_eq!(member.leader_id, None);
    assert_eq!(member.phone, None);

    Ok(())
}
