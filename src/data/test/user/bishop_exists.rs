use super::*;

/// Tests the Bishop presence check on an empty database.
///
/// Verifies that the startup bootstrap sees no Bishop when only other roles
/// exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn false_without_bishop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = UserRepository::new(db);

    factory::user::create_user_with_role(db, Role::Governor).await?;

    assert!(!repository.bishop_exists().await?);

    Ok(())
}

/// Tests the Bishop presence check once a Bishop account exists.
///
/// Expected: Ok(true)
#[tokio::test]
async fn true_with_bishop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = UserRepository::new(db);

    factory::user::create_user_with_role(db, Role::Bishop).await?;

    assert!(repository.bishop_exists().await?);

    Ok(())
}
