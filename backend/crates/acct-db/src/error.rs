use acct_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    /// A UNIQUE constraint rejected the write; `field` is the offending column
    #[error("Unique constraint violated on {field} {location}")]
    UniqueViolation {
        field: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match unique_violation_column(&source) {
            Some(field) => Self::UniqueViolation { field, location },
            None => Self::Sqlx { source, location },
        }
    }
}

/// SQLite reports "UNIQUE constraint failed: users.email"
fn unique_violation_column(error: &sqlx::Error) -> Option<String> {
    let sqlx::Error::Database(db_error) = error else {
        return None;
    };

    if !db_error.is_unique_violation() {
        return None;
    }

    db_error
        .message()
        .rsplit_once('.')
        .map(|(_, column)| column.trim().to_string())
}

pub type Result<T> = std::result::Result<T, DbError>;
