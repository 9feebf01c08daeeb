use super::*;

/// Tests fetching one Sunday's records under the unrestricted scope.
///
/// Verifies that only rows for the requested date come back.
///
/// Expected: Ok with the two rows for that Sunday
#[tokio::test]
async fn returns_rows_for_requested_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_care_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = AttendanceRepository::new(db);

    let (leader, _region, area, member) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let second = factory::member::create_member_with_leader(db, area.id, leader.id).await?;

    let sunday = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
    factory::attendance::AttendanceFactory::new(db, member.id, leader.id)
        .service_date(sunday)
        .build()
        .await?;
    factory::attendance::AttendanceFactory::new(db, second.id, leader.id)
        .service_date(sunday)
        .present(false)
        .build()
        .await?;
    factory::attendance::AttendanceFactory::new(db, member.id, leader.id)
        .service_date(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap())
        .build()
        .await?;

    let rows = repository.get_by_service_date(sunday, &Scope::All).await?;

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.service_date == sunday));

    Ok(())
}

/// Tests that a leader scope restricts the Sunday view to own members.
///
/// Verifies that another leader's rows for the same date stay hidden.
///
/// Expected: Ok with only the caller's member's row
#[tokio::test]
async fn leader_scope_hides_other_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_care_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = AttendanceRepository::new(db);

    let (leader, _region, area, own_member) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let other_leader = factory::user::create_user(db).await?;
    let other_member =
        factory::member::create_member_with_leader(db, area.id, other_leader.id).await?;

    let sunday = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
    factory::attendance::AttendanceFactory::new(db, own_member.id, leader.id)
        .service_date(sunday)
        .build()
        .await?;
    factory::attendance::AttendanceFactory::new(db, other_member.id, other_leader.id)
        .service_date(sunday)
        .build()
        .await?;

    let rows = repository
        .get_by_service_date(sunday, &Scope::Leader(leader.id))
        .await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].member_id, own_member.id);

    Ok(())
}

/// Tests the inclusive date-range query.
///
/// Verifies that rows on both boundary Sundays are included and rows outside
/// the range are not.
///
/// Expected: Ok with the two boundary rows in date order
#[tokio::test]
async fn range_is_inclusive_on_both_ends() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_care_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = AttendanceRepository::new(db);

    let (leader, _region, _area, member) =
        factory::helpers::create_member_with_dependencies(db).await?;

    let first = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
    let last = NaiveDate::from_ymd_opt(2025, 3, 16).unwrap();
    factory::attendance::AttendanceFactory::new(db, member.id, leader.id)
        .service_date(first)
        .build()
        .await?;
    factory::attendance::AttendanceFactory::new(db, member.id, leader.id)
        .service_date(last)
        .build()
        .await?;
    factory::attendance::AttendanceFactory::new(db, member.id, leader.id)
        .service_date(NaiveDate::from_ymd_opt(2025, 3, 23).unwrap())
        .build()
        .await?;

    let rows = repository.get_range(first, last, &Scope::All).await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].service_date, first);
    assert_eq!(rows[1].service_date, last);

    Ok(())
}
