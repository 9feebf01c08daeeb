use super::*;
use chrono::Utc;

/// Tests recording one finished sync run.
///
/// Verifies that the inserted entry carries the counts, status and detail it
/// was given.
///
/// Expected: Ok with the stored entry
#[tokio::test]
async fn records_finished_run() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .with_table(SyncLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = SyncLogRepository::new(db);

    let leader = factory::user::create_user(db).await?;
    let started = Utc::now();

    let entry = repository
        .create(CreateSyncLogParam {
            initiated_by: leader.id,
            started_at: started,
            finished_at: started + chrono::Duration::milliseconds(830),
            records_pushed: 42,
            records_failed: 1,
            status: "Partial".to_string(),
            detail: Some("40 members, 2 attendance rows, 1 meetings".to_string()),
        })
        .await?;

    assert_eq!(entry.initiated_by, leader.id);
    assert_eq!(entry.records_pushed, 42);
    assert_eq!(entry.records_failed, 1);
    assert_eq!(entry.status, "Partial");
    assert!(entry.detail.is_some());

    Ok(())
}
