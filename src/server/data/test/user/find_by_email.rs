use super::*;

/// Tests finding a user by email.
///
/// Expected: Ok(Some) for the registered email, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("guest@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("guest@example.com").await?;
    assert_eq!(found.map(|u| u.id), Some(created.id));
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}
