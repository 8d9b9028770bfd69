pub mod password_hash;
pub mod user;
