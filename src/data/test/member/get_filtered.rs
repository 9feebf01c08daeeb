use super::*;

fn unfiltered(page: u64, per_page: u64) -> MemberFilter {
    MemberFilter {
        state: None,
        area_id: None,
        search: None,
        page,
        per_page,
    }
}

/// Tests listing members ordered by name with pagination.
///
/// Verifies that rows come back sorted by last then first name and the total
/// counts every match, not just the page.
///
/// Expected: Ok with the first page of two and a total of three
#[tokio::test]
async fn pages_and_orders_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = MemberRepository::new(db);

    let region = factory::region::create_region(db).await?;
    let area = factory::area::create_area(db, region.id).await?;

    factory::member::MemberFactory::new(db, area.id)
        .first_name("Kwame")
        .last_name("Osei")
        .build()
        .await?;
    factory::member::MemberFactory::new(db, area.id)
        .first_name("Adwoa")
        .last_name("Baah")
        .build()
        .await?;
    factory::member::MemberFactory::new(db, area.id)
        .first_name("Kofi")
        .last_name("Baah")
        .build()
        .await?;

    let (members, total) = repository.get_filtered(unfiltered(0, 2), &Scope::All).await?;

    assert_eq!(total, 3);
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].first_name, "Adwoa");
    assert_eq!(members[1].first_name, "Kofi");

    Ok(())
}

/// Tests the engagement state filter.
///
/// Verifies that only members in the requested state come back.
///
/// Expected: Ok with the single Goat member
#[tokio::test]
async fn filters_by_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = MemberRepository::new(db);

    let region = factory::region::create_region(db).await?;
    let area = factory::area::create_area(db, region.id).await?;

    factory::member::create_member(db, area.id).await?;
    let goat = factory::member::MemberFactory::new(db, area.id)
        .state(MemberState::Goat)
        .build()
        .await?;

    let filter = MemberFilter {
        state: Some(MemberState::Goat),
        ..unfiltered(0, 10)
    };
    let (members, total) = repository.get_filtered(filter, &Scope::All).await?;

    assert_eq!(total, 1);
    assert_eq!(members[0].id, goat.id);

    Ok(())
}

/// Tests the name search filter.
///
/// Verifies that the search term matches substrings of the first or the last
/// name.
///
/// Expected: Ok with both members whose names contain the term
#[tokio::test]
async fn searches_both_name_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = MemberRepository::new(db);

    let region = factory::region::create_region(db).await?;
    let area = factory::area::create_area(db, region.id).await?;

    factory::member::MemberFactory::new(db, area.id)
        .first_name("Mensimah")
        .last_name("Quartey")
        .build()
        .await?;
    factory::member::MemberFactory::new(db, area.id)
        .first_name("Kobby")
        .last_name("Mensah")
        .build()
        .await?;
    factory::member::MemberFactory::new(db, area.id)
        .first_name("Selorm")
        .last_name("Agbeko")
        .build()
        .await?;

    let filter = MemberFilter {
        search: Some("Mens".to_string()),
        ..unfiltered(0, 10)
    };
    let (members, total) = repository.get_filtered(filter, &Scope::All).await?;

    assert_eq!(total, 2);
    assert!(members.iter().all(|m| {
        m.first_name.contains("Mens") || m.last_name.contains("Mens")
    }));

    Ok(())
}

/// Tests that filters narrow the scope instead of widening it.
///
/// Verifies that requesting an area outside the caller's scope yields nothing
/// even though the area exists.
///
/// Expected: Ok with no rows
#[tokio::test]
async fn area_filter_cannot_escape_scope() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = MemberRepository::new(db);

    let region = factory::region::create_region(db).await?;
    let scoped_area = factory::area::create_area(db, region.id).await?;
    let foreign_area = factory::area::create_area(db, region.id).await?;
    factory::member::create_member(db, foreign_area.id).await?;

    let filter = MemberFilter {
        area_id: Some(foreign_area.id),
        ..unfiltered(0, 10)
    };
    let scope = Scope::Areas(vec![scoped_area.id]);
    let (members, total) = repository.get_filtered(filter, &scope).await?;

    assert_eq!(total, 0);
    assert!(members.is_empty());

    Ok(())
}
