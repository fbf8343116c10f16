mod property;
mod user;
