use crate::{
    FieldErrors, FieldInput, MAX_NAME_LENGTH, Presence, Result as CoreErrorResult, is_valid_email,
    normalize_email,
};

pub const REQUIRED: &str = "This field is required.";
pub const BLANK: &str = "This field may not be blank.";
pub const NULL: &str = "This field may not be null.";
pub const NOT_A_STRING: &str = "Not a valid string.";
pub const INVALID_USERNAME: &str = "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const DUPLICATE_USERNAME: &str = "A user with that username already exists.";
pub const DUPLICATE_EMAIL: &str = "A user with this email already exists.";

pub fn too_long(max: usize) -> String {
    format!("Ensure this field has no more than {} characters.", max)
}

/// Collects field-level errors for user input.
///
/// Each field method returns the cleaned value when the field is present and
/// valid, and `None` otherwise (absent, or rejected with a recorded error).
/// `null` and non-string values are rejected for every field.
/// Callers finish with [`UserValidator::finish`], which fails if any field
/// was rejected.
#[derive(Debug, Default)]
pub struct UserValidator {
    errors: FieldErrors,
}

impl UserValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(&mut self, value: FieldInput, presence: Presence) -> Option<String> {
        let value = self.present("username", value, presence)?;
        let value = value.trim();

        if value.is_empty() {
            self.errors.add("username", BLANK);
            return None;
        }
        if value.chars().count() > MAX_NAME_LENGTH {
            self.errors.add("username", too_long(MAX_NAME_LENGTH));
            return None;
        }
        if !value
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
        {
            self.errors.add("username", INVALID_USERNAME);
            return None;
        }

        Some(value.to_string())
    }

    /// Returns the address with its domain lowercased
    pub fn email(&mut self, value: FieldInput, presence: Presence) -> Option<String> {
        let value = self.present("email", value, presence)?;
        let value = value.trim();

        if value.is_empty() {
            self.errors.add("email", BLANK);
            return None;
        }
        if !is_valid_email(value) {
            self.errors.add("email", INVALID_EMAIL);
            return None;
        }

        Some(normalize_email(value))
    }

    /// Presence only; surrounding whitespace is part of the password
    pub fn password(&mut self, value: FieldInput, presence: Presence) -> Option<String> {
        let value = self.present("password", value, presence)?;

        if value.is_empty() {
            self.errors.add("password", BLANK);
            return None;
        }

        Some(value)
    }

    pub fn first_name(&mut self, value: FieldInput) -> Option<String> {
        self.optional_name("first_name", value)
    }

    pub fn last_name(&mut self, value: FieldInput) -> Option<String> {
        self.optional_name("last_name", value)
    }

    /// Record an error found outside this validator (e.g. a uniqueness check)
    pub fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors.add(field, message);
    }

    #[track_caller]
    pub fn finish(self) -> CoreErrorResult<()> {
        self.errors.into_result()
    }

    fn present(&mut self, field: &str, value: FieldInput, presence: Presence) -> Option<String> {
        match value {
            FieldInput::Text(value) => return Some(value),
            FieldInput::Absent if presence == Presence::Required => {
                self.errors.add(field, REQUIRED)
            }
            FieldInput::Absent => {}
            FieldInput::Null => self.errors.add(field, NULL),
            FieldInput::NotAString => self.errors.add(field, NOT_A_STRING),
        }
        None
    }

    fn optional_name(&mut self, field: &str, value: FieldInput) -> Option<String> {
        let value = self.present(field, value, Presence::Optional)?;
        let value = value.trim();

        if value.chars().count() > MAX_NAME_LENGTH {
            self.errors.add(field, too_long(MAX_NAME_LENGTH));
            return None;
        }

        Some(value.to_string())
    }
}
