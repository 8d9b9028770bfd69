use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::collections::BTreeMap;
use std::fmt;
use std::panic::Location;

use serde::Serialize;

/// Field-level validation messages, keyed by field name.
///
/// Serializes as `{"field": ["message", ...]}` so clients can see every
/// field that failed in one response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-field shorthand
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `Ok(())` when no field failed, otherwise a validation error carrying
    /// every collected message
    #[track_caller]
    pub fn into_result(self) -> CoreErrorResult<()> {
        if self.is_empty() {
            return Ok(());
        }

        Err(CoreError::Validation {
            errors: self,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{}: {}", field, messages.join(" "))?;
        }
        Ok(())
    }
}
