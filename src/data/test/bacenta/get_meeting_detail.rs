use super::*;

/// Tests assembling a meeting with its attendance list and offerings.
///
/// Verifies that the detail carries the meeting row plus every attendee and
/// offering attached to it, and nothing from other meetings.
///
/// Expected: Ok(Some) with two attendees and one offering
#[tokio::test]
async fn assembles_full_detail() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_bacenta_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = BacentaRepository::new(db);

    let (leader, _region, area, member) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let second = factory::member::create_member_with_leader(db, area.id, leader.id).await?;
    let meeting = factory::bacenta_meeting::create_meeting(db, leader.id).await?;
    let other_meeting = factory::bacenta_meeting::create_meeting(db, leader.id).await?;

    repository
        .add_attendance(AddBacentaAttendanceParam {
            meeting_id: meeting.id,
            member_id: member.id,
            first_timer: false,
        })
        .await?;
    repository
        .add_attendance(AddBacentaAttendanceParam {
            meeting_id: meeting.id,
            member_id: second.id,
            first_timer: true,
        })
        .await?;
    repository
        .add_offering(AddOfferingParam {
            meeting_id: meeting.id,
            amount_minor: 2500,
            note: Some("Love offering".to_string()),
        })
        .await?;
    repository
        .add_offering(AddOfferingParam {
            meeting_id: other_meeting.id,
            amount_minor: 1000,
            note: None,
        })
        .await?;

    let detail = repository.get_meeting_detail(meeting.id).await?.unwrap();

    assert_eq!(detail.meeting.id, meeting.id);
    assert_eq!(detail.attendance.len(), 2);
    assert!(detail.attendance[1].first_timer);
    assert_eq!(detail.offerings.len(), 1);
    assert_eq!(detail.offerings[0].amount_minor, 2500);

    Ok(())
}

/// Tests the detail lookup for a missing meeting.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_meeting() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_bacenta_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = BacentaRepository::new(db);

    let detail = repository.get_meeting_detail(31337).await?;

    assert!(detail.is_none());

    Ok(())
}

/// Tests the duplicate-attendee check.
///
/// Expected: Ok(true) for a listed member, Ok(false) for an unlisted one
#[tokio::test]
async fn attendance_exists_detects_listed_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_bacenta_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = BacentaRepository::new(db);

    let (leader, _region, area, member) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let unlisted = factory::member::create_member(db, area.id).await?;
    let meeting = factory::bacenta_meeting::create_meeting(db, leader.id).await?;

    repository
        .add_attendance(AddBacentaAttendanceParam {
            meeting_id: meeting.id,
            member_id: member.id,
            first_timer: false,
        })
        .await?;

    assert!(repository.attendance_exists(meeting.id, member.id).await?);
    assert!(!repository.attendance_exists(meeting.id, unlisted.id).await?);

    Ok(())
}
