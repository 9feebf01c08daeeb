use super::*;

/// Tests replacing a stored password hash.
///
/// Verifies that the new hash is written and the rest of the row is left
/// alone.
///
/// Expected: Ok with the new hash visible on the entity row
#[tokio::test]
async fn replaces_stored_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = UserRepository::new(db);

    let user = factory::user::UserFactory::new(db)
        .username("esi")
        .build()
        .await?;

    repository
        .update_password(user.id, "$argon2id$v=19$m=19456,t=2,p=1$bmV3$bmV3aGFzaA".to_string())
        .await?;

    let entity = repository.find_entity_by_username("esi").await?.unwrap();

    assert_eq!(
        entity.password_hash,
        "$argon2id$v=19$m=19456,t=2,p=1$bmV3$bmV3aGFzaA"
    );
    assert_eq!(entity.full_name, user.full_name);

    Ok(())
}
