pub mod error;
pub mod extractors;
pub mod middleware;
pub mod register;
pub mod users;
