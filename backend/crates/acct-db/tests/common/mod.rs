#![allow(dead_code)]

mod test_db;

pub use fixtures::{create_test_user, new_user, new_user_with_password};
pub use test_db::create_test_pool;
