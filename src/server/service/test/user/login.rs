use super::*;

/// Tests logging in with the registered password.
///
/// Expected: Ok with the registered user
#[tokio::test]
async fn logs_in_with_correct_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let registered = service
        .register(register_params("ana@example.com", "hunter2"))
        .await?;

    let user = service
        .login(LoginParams {
            email: "ana@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await?;

    assert_eq!(user.id, registered.id);

    Ok(())
}

/// Tests logging in with a wrong password or unknown email.
///
/// Expected: Err(InvalidCredentials) for both
#[tokio::test]
async fn rejects_wrong_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    service
        .register(register_params("ana@example.com", "hunter2"))
        .await?;

    for (email, password) in [("ana@example.com", "wrong"), ("nobody@example.com", "hunter2")] {
        let result = service
            .login(LoginParams {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
    }

    Ok(())
}

/// Tests password login on an account created through Google.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn rejects_account_without_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("google@example.com")
        .build()
        .await?;

    let service = UserService::new(db);
    let result = service
        .login(LoginParams {
            email: "google@example.com".to_string(),
            password: String::new(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
