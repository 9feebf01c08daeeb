use super::*;

/// Tests recording one member's Sunday attendance.
///
/// Verifies that the row stores the member, date, presence flag and the
/// capturing leader.
///
/// Expected: Ok with the created record
#[tokio::test]
async fn records_attendance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_care_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = AttendanceRepository::new(db);

    let (leader, _region, _area, member) =
        factory::helpers::create_member_with_dependencies(db).await?;

    let param = RecordAttendanceParam {
        member_id: member.id,
        service_date: NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
        present: false,
    };
    let record = repository.record(param, leader.id).await?;

    assert_eq!(record.member_id, member.id);
    assert_eq!(
        record.service_date,
        NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
    );
    assert!(!record.present);
    assert_eq!(record.recorded_by, leader.id);

    Ok(())
}

/// Tests the duplicate-detection check.
///
/// Verifies that a member with a row for a Sunday reports as already
/// recorded for that date and not for others.
///
/// Expected: Ok(true) for the recorded date, Ok(false) for another
#[tokio::test]
async fn detects_existing_record_for_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_care_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = AttendanceRepository::new(db);

    let (leader, _region, _area, member) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let sunday = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
    factory::attendance::AttendanceFactory::new(db, member.id, leader.id)
        .service_date(sunday)
        .build()
        .await?;

    assert!(repository.exists_for_member_on(member.id, sunday).await?);
    assert!(
        !repository
            .exists_for_member_on(member.id, NaiveDate::from_ymd_opt(2025, 3, 9).unwrap())
            .await?
    );

    Ok(())
}
