use super::*;

/// Tests finding an existing property.
///
/// Expected: Ok(Some) with all listing fields
#[tokio::test]
async fn finds_existing_property() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Property)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::property::PropertyFactory::new(db)
        .location(Some("Cra 7 #45-12, Medellín".to_string()))
        .price(Some(250000.0))
        .build()
        .await?;

    let repo = PropertyRepository::new(db);
    let property = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(property.name, created.name);
    assert_eq!(property.location.as_deref(), Some("Cra 7 #45-12, Medellín"));
    assert_eq!(property.price, Some(250000.0));

    Ok(())
}

/// Tests finding a property that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_property() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Property)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PropertyRepository::new(db);

    assert!(repo.find_by_id(999999).await?.is_none());

    Ok(())
}
