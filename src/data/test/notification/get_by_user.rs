use super::*;

/// Tests listing a leader's notifications.
///
/// Verifies that only the addressed leader's notifications come back, newest
/// first.
///
/// Expected: Ok with the leader's two notifications, latest on top
#[tokio::test]
async fn lists_own_notifications_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .with_table(Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = NotificationRepository::new(db);

    let leader = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    repository
        .create(leader.id, "Members transferred", "3 members moved to you")
        .await?;
    let latest = repository
        .create(leader.id, "Reminder", "Sunday attendance is due")
        .await?;
    repository.create(other.id, "Not yours", "hidden").await?;

    let notifications = repository.get_by_user(leader.id, false).await?;

    assert_eq!(notifications.len(), 2);
    assert_eq!(notifications[0].id, latest.id);
    assert!(notifications.iter().all(|n| !n.read));

    Ok(())
}

/// Tests the unread-only filter.
///
/// Verifies that a read notification drops out of the unread view but stays
/// in the full list.
///
/// Expected: Ok with one unread row and two rows overall
#[tokio::test]
async fn unread_filter_hides_read_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .with_table(Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = NotificationRepository::new(db);

    let leader = factory::user::create_user(db).await?;
    let seen = repository
        .create(leader.id, "Old news", "already handled")
        .await?;
    let unseen = repository
        .create(leader.id, "Fresh", "needs attention")
        .await?;

    repository.mark_read(seen.id, leader.id).await?;

    let unread = repository.get_by_user(leader.id, true).await?;
    let all = repository.get_by_user(leader.id, false).await?;

    assert_eq!(unread.len(), 1);
    assert_eq!(unread[0].id, unseen.id);
    assert_eq!(all.len(), 2);

    Ok(())
}
