use super::*;

/// Tests creating a leader account.
///
/// Verifies that the account is stored with the provided fields, starts out
/// active with no photo, and that the returned model never carries the hash.
///
/// Expected: Ok with the created account
#[tokio::test]
async fn creates_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = UserRepository::new(db);

    let param = CreateUserParam {
        username: "afia".to_string(),
        password: None,
        full_name: "Afia Owusu".to_string(),
        phone: Some("+233201234567".to_string()),
        role: Role::BacentaLeader,
        area_id: None,
    };

    let user = repository
        .create(param, "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string())
        .await?;

    assert_eq!(user.username, "afia");
    assert_eq!(user.full_name, "Afia Owusu");
    assert_eq!(user.phone, Some("+233201234567".to_string()));
    assert_eq!(user.role, Role::BacentaLeader);
    assert!(user.active);
    assert_eq!(user.photo_url, None);

    Ok(())
}

/// Tests that the stored password hash is reachable through the entity lookup.
///
/// Verifies that `find_entity_by_username` returns the full row the login flow
/// needs, including the hash passed at creation time.
///
/// Expected: Ok with the entity row carrying the stored hash
#[tokio::test]
async fn stores_password_hash_for_login_lookup() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = UserRepository::new(db);

    let param = CreateUserParam {
        username: "kojo".to_string(),
        password: None,
        full_name: "Kojo Asante".to_string(),
        phone: None,
        role: Role::AreaPastor,
        area_id: None,
    };

    repository
        .create(param, "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string())
        .await?;

    let entity = repository.find_entity_by_username("kojo").await?.unwrap();

    assert_eq!(
        entity.password_hash,
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA"
    );

    Ok(())
}

/// Tests the username availability check.
///
/// Verifies that a taken username reports true and a free one reports false.
///
/// Expected: Ok(true) for the existing account, Ok(false) otherwise
#[tokio::test]
async fn username_exists_reports_taken_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = UserRepository::new(db);

    factory::user::UserFactory::new(db)
        .username("ama")
        .build()
        .await?;

    assert!(repository.username_exists("ama").await?);
    assert!(!repository.username_exists("akosua").await?);

    Ok(())
}
