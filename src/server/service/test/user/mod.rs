use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::{GoogleUserInfo, LoginParams, RegisterUserParams},
    service::user::UserService,
};
use test_utils::{builder::TestBuilder, factory};

mod login;
mod register;

fn register_params(email: &str, password: &str) -> RegisterUserParams {
    RegisterUserParams {
        name: "Ana".to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}
