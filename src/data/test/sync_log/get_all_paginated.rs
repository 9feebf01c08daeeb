use super::*;
use chrono::{Duration, Utc};

use crate::model::sync::GetSyncLogsParam;

/// Tests paging through the audit trail.
///
/// Verifies that entries come back newest first and that the total spans all
/// pages.
///
/// Expected: Ok with two entries on the first page, one on the second
#[tokio::test]
async fn pages_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .with_table(SyncLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = SyncLogRepository::new(db);

    let leader = factory::user::create_user(db).await?;
    let base = Utc::now();

    for offset in 0..3 {
        let started = base + Duration::hours(offset);
        repository
            .create(CreateSyncLogParam {
                initiated_by: leader.id,
                started_at: started,
                finished_at: started + Duration::seconds(1),
                records_pushed: offset as i32,
                records_failed: 0,
                status: "Completed".to_string(),
                detail: None,
            })
            .await?;
    }

    let (first_page, total) = repository
        .get_all_paginated(GetSyncLogsParam {
            page: 0,
            per_page: 2,
        })
        .await?;
    let (second_page, _) = repository
        .get_all_paginated(GetSyncLogsParam {
            page: 1,
            per_page: 2,
        })
        .await?;

    assert_eq!(total, 3);
    assert_eq!(first_page.len(), 2);
    assert_eq!(second_page.len(), 1);
    // Newest run first
    assert_eq!(first_page[0].records_pushed, 2);
    assert_eq!(second_page[0].records_pushed, 0);

    Ok(())
}
