use super::*;

/// Tests marking an own notification as read.
///
/// Expected: Ok(Some) with the read flag set
#[tokio::test]
async fn marks_own_notification_read() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .with_table(Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = NotificationRepository::new(db);

    let leader = factory::user::create_user(db).await?;
    let notification = repository
        .create(leader.id, "Reminder", "Sunday attendance is due")
        .await?;

    let updated = repository.mark_read(notification.id, leader.id).await?;

    assert!(updated.unwrap().read);

    Ok(())
}

/// Tests marking another leader's notification.
///
/// Verifies that a notification addressed to someone else behaves like a
/// missing one and stays unread.
///
/// Expected: Ok(None) with the row unchanged
#[tokio::test]
async fn cannot_mark_foreign_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .with_table(Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = NotificationRepository::new(db);

    let owner = factory::user::create_user(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let notification = repository
        .create(owner.id, "Private", "for the owner only")
        .await?;

    let result = repository.mark_read(notification.id, intruder.id).await?;

    assert!(result.is_none());
    let rows = repository.get_by_user(owner.id, true).await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}

/// Tests marking a missing notification.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .with_table(Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = NotificationRepository::new(db);

    let leader = factory::user::create_user(db).await?;

    let result = repository.mark_read(5555, leader.id).await?;

    assert!(result.is_none());

    Ok(())
}
