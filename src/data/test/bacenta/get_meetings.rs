use super::*;

/// Tests listing meetings newest first.
///
/// Verifies that the list is ordered by meeting date descending.
///
/// Expected: Ok with the later meeting first
#[tokio::test]
async fn lists_meetings_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_bacenta_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = BacentaRepository::new(db);

    let leader = factory::user::create_user(db).await?;
    let earlier = factory::bacenta_meeting::BacentaMeetingFactory::new(db, leader.id)
        .meeting_date(NaiveDate::from_ymd_opt(2025, 3, 5).unwrap())
        .build()
        .await?;
    let later = factory::bacenta_meeting::BacentaMeetingFactory::new(db, leader.id)
        .meeting_date(NaiveDate::from_ymd_opt(2025, 3, 12).unwrap())
        .build()
        .await?;

    let range = MeetingRangeParam {
        from: None,
        to: None,
    };
    let meetings = repository.get_meetings(range, &Scope::All).await?;

    assert_eq!(meetings.len(), 2);
    assert_eq!(meetings[0].id, later.id);
    assert_eq!(meetings[1].id, earlier.id);

    Ok(())
}

/// Tests the meeting date-range bounds.
///
/// Verifies that both range ends are inclusive and meetings outside fall
/// away.
///
/// Expected: Ok with only the meeting inside the range
#[tokio::test]
async fn range_bounds_are_inclusive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_bacenta_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = BacentaRepository::new(db);

    let leader = factory::user::create_user(db).await?;
    let inside = factory::bacenta_meeting::BacentaMeetingFactory::new(db, leader.id)
        .meeting_date(NaiveDate::from_ymd_opt(2025, 3, 12).unwrap())
        .build()
        .await?;
    factory::bacenta_meeting::BacentaMeetingFactory::new(db, leader.id)
        .meeting_date(NaiveDate::from_ymd_opt(2025, 3, 26).unwrap())
        .build()
        .await?;

    let range = MeetingRangeParam {
        from: Some(NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()),
        to: Some(NaiveDate::from_ymd_opt(2025, 3, 19).unwrap()),
    };
    let meetings = repository.get_meetings(range, &Scope::All).await?;

    assert_eq!(meetings.len(), 1);
    assert_eq!(meetings[0].id, inside.id);

    Ok(())
}

/// Tests that a leader scope hides other leaders' meetings.
///
/// Expected: Ok with only the caller's meeting
#[tokio::test]
async fn leader_scope_sees_own_meetings_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_bacenta_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = BacentaRepository::new(db);

    let leader = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let own_meeting = factory::bacenta_meeting::create_meeting(db, leader.id).await?;
    factory::bacenta_meeting::create_meeting(db, other.id).await?;

    let range = MeetingRangeParam {
        from: None,
        to: None,
    };
    let meetings = repository
        .get_meetings(range, &Scope::Leader(leader.id))
        .await?;

    assert_eq!(meetings.len(), 1);
    assert_eq!(meetings[0].id, own_meeting.id);

    Ok(())
}

/// Tests the duplicate-meeting check.
///
/// Verifies that one leader reporting twice for the same date is caught
/// while another leader on the same date is not.
///
/// Expected: Ok(true) for the same leader and date, Ok(false) otherwise
#[tokio::test]
async fn meeting_exists_is_per_leader_and_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_bacenta_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = BacentaRepository::new(db);

    let leader = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
    factory::bacenta_meeting::BacentaMeetingFactory::new(db, leader.id)
        .meeting_date(date)
        .build()
        .await?;

    assert!(repository.meeting_exists(leader.id, date).await?);
    assert!(!repository.meeting_exists(other.id, date).await?);
    assert!(
        !repository
            .meeting_exists(leader.id, NaiveDate::from_ymd_opt(2025, 3, 12).unwrap())
            .await?
    );

    Ok(())
}
