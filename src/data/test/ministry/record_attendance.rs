use super::*;

/// Tests recording a ministry headcount tally.
///
/// Verifies that the tally stores the ministry, date, headcount and the
/// recording leader.
///
/// Expected: Ok with the created tally
#[tokio::test]
async fn records_headcount() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ministry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = MinistryRepository::new(db);

    let leader = factory::user::create_user(db).await?;
    let ministry = factory::ministry::create_ministry(db).await?;

    let param = RecordMinistryAttendanceParam {
        ministry_id: ministry.id,
        service_date: NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
        headcount: 34,
        recorded_by: leader.id,
    };
    let tally = repository.record_attendance(param).await?;

    assert_eq!(tally.ministry_id, ministry.id);
    assert_eq!(tally.headcount, 34);
    assert_eq!(tally.recorded_by, leader.id);

    Ok(())
}

/// Tests the duplicate-tally check.
///
/// Verifies that a second tally for the same ministry and date is caught
/// while other dates and ministries stay clear.
///
/// Expected: Ok(true) for the recorded pair, Ok(false) otherwise
#[tokio::test]
async fn detects_existing_tally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ministry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = MinistryRepository::new(db);

    let leader = factory::user::create_user(db).await?;
    let ministry = factory::ministry::create_ministry(db).await?;
    let other = factory::ministry::create_ministry(db).await?;
    let date = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();

    repository
        .record_attendance(RecordMinistryAttendanceParam {
            ministry_id: ministry.id,
            service_date: date,
            headcount: 20,
            recorded_by: leader.id,
        })
        .await?;

    assert!(repository.attendance_exists(ministry.id, date).await?);
    assert!(!repository.attendance_exists(other.id, date).await?);
    assert!(
        !repository
            .attendance_exists(ministry.id, NaiveDate::from_ymd_opt(2025, 3, 9).unwrap())
            .await?
    );

    Ok(())
}

/// Tests the tally range query.
///
/// Verifies that tallies come back newest first and the optional bounds
/// narrow the window.
///
/// Expected: Ok with tallies in descending date order
#[tokio::test]
async fn lists_tallies_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ministry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = MinistryRepository::new(db);

    let leader = factory::user::create_user(db).await?;
    let ministry = factory::ministry::create_ministry(db).await?;

    for day in [2, 9, 16] {
        repository
            .record_attendance(RecordMinistryAttendanceParam {
                ministry_id: ministry.id,
                service_date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
                headcount: 10 + day as i32,
                recorded_by: leader.id,
            })
            .await?;
    }

    let all = repository
        .get_attendance_range(ministry.id, None, None)
        .await?;
    assert_eq!(all.len(), 3);
    assert_eq!(
        all[0].service_date,
        NaiveDate::from_ymd_opt(2025, 3, 16).unwrap()
    );

    let bounded = repository
        .get_attendance_range(
            ministry.id,
            Some(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()),
            Some(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()),
        )
        .await?;
    assert_eq!(bounded.len(), 1);
    assert_eq!(bounded[0].headcount, 19);

    Ok(())
}
