pub mod email;
pub mod field_errors;
pub mod field_input;
pub mod presence;
pub mod user_validator;
