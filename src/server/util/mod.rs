pub mod date;
pub mod password;
