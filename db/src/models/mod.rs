pub mod grupo;
pub mod user;
