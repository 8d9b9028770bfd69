pub mod create_user_request;
pub mod identity;
pub mod update_user_request;
pub mod user_dto;
pub mod users;
