use super::*;

/// Tests registering a new account.
///
/// Verifies the stored password is an Argon2 hash rather than the plaintext.
///
/// Expected: Ok with hashed password
#[tokio::test]
async fn registers_with_hashed_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service
        .register(register_params("ana@example.com", "hunter2"))
        .await?;

    assert_eq!(user.email, "ana@example.com");
    assert_ne!(user.password_hash, "hunter2");
    assert!(user.password_hash.starts_with("$argon2"));

    Ok(())
}

/// Tests registering an email that is already taken.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
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

    let service = UserService::new(db);
    let result = service
        .register(register_params("ana@example.com", "hunter2"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests registering with an empty password.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_missing_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let result = service.register(register_params("ana@example.com", "")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
