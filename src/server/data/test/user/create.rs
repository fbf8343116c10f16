use super::*;

/// Tests creating a user.
///
/// Expected: Ok with the stored name, email and hash
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
        })
        .await?;

    assert_eq!(user.name, "Ana");
    assert_eq!(user.email, "ana@example.com");
    assert!(user.has_password());

    Ok(())
}

/// Tests that a second account with the same email is rejected.
///
/// Expected: Err from the unique constraint
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("ana@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: String::new(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
