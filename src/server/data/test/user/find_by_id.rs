use super::*;

/// Tests finding a user by id.
///
/// Expected: Ok(Some) for an existing id, Ok(None) for a missing one
#[tokio::test]
async fn finds_user_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(found.email, created.email);
    assert!(!found.has_password());
    assert!(repo.find_by_id(999999).await?.is_none());

    Ok(())
}
