//! User repository - the identity store.
//!
//! Every write is a single SQL statement, so a create, update or delete is
//! atomic on its own. Uniqueness of `username` and `email` is enforced by the
//! schema; callers pre-check with [`UserRepository::username_taken`] and
//! [`UserRepository::email_taken`] for friendly messages, and a racing
//! duplicate still surfaces as [`DbError::UniqueViolation`].

use crate::{DbError, Result as DbErrorResult};

use acct_core::{ErrorLocation, NewUser, PasswordHash, User, UserChanges};

use std::panic::Location;

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

/// Raw `users` row
#[derive(FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    first_name: String,
    last_name: String,
    date_joined: i64,
    updated_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    #[track_caller]
    fn try_from(r: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            id: r.id,
            username: r.username,
            email: r.email,
            password_hash: PasswordHash::from_phc(r.password_hash),
            first_name: r.first_name,
            last_name: r.last_name,
            date_joined: timestamp(r.date_joined, "users.date_joined")?,
            updated_at: timestamp(r.updated_at, "users.updated_at")?,
        })
    }
}

#[track_caller]
fn timestamp(secs: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a new identity and return it with its assigned id
    pub async fn create(&self, new_user: &NewUser) -> DbErrorResult<User> {
        let date_joined = new_user.date_joined.timestamp();

        let row = sqlx::query_as::<_, UserRow>(
            r#"
                INSERT INTO users (
                    username, email, password_hash, first_name, last_name,
                    date_joined, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
                RETURNING id, username, email, password_hash, first_name, last_name,
                    date_joined, updated_at
            "#,
        )
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(new_user.password_hash.as_str())
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(date_joined)
        .bind(date_joined)
        .fetch_one(&self.pool)
        .await?;

        User::try_from(row)
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, username, email, password_hash, first_name, last_name,
                    date_joined, updated_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, username, email, password_hash, first_name, last_name,
                    date_joined, updated_at
                FROM users
                WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    /// All identities, oldest first
    pub async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, username, email, password_hash, first_name, last_name,
                    date_joined, updated_at
                FROM users
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(User::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Whether another identity (other than `exclude_id`) already uses `username`
    pub async fn username_taken(
        &self,
        username: &str,
        exclude_id: Option<i64>,
    ) -> DbErrorResult<bool> {
        let taken = sqlx::query_scalar::<_, i64>(
            r#"
                SELECT EXISTS(
                    SELECT 1 FROM users WHERE username = ? AND (? IS NULL OR id != ?)
                )
            "#,
        )
        .bind(username)
        .bind(exclude_id)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(taken != 0)
    }

    /// Whether another identity (other than `exclude_id`) already uses `email`
    pub async fn email_taken(&self, email: &str, exclude_id: Option<i64>) -> DbErrorResult<bool> {
        let taken = sqlx::query_scalar::<_, i64>(
            r#"
                SELECT EXISTS(
                    SELECT 1 FROM users WHERE email = ? AND (? IS NULL OR id != ?)
                )
            "#,
        )
        .bind(email)
        .bind(exclude_id)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(taken != 0)
    }

    /// Apply `changes` in one statement. Returns `None` if the id is unknown.
    pub async fn update(&self, id: i64, changes: &UserChanges) -> DbErrorResult<Option<User>> {
        let updated_at = Utc::now().timestamp();
        let password_hash = changes.password_hash.as_ref().map(PasswordHash::as_str);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
                UPDATE users SET
                    username = COALESCE(?, username),
                    email = COALESCE(?, email),
                    first_name = COALESCE(?, first_name),
                    last_name = COALESCE(?, last_name),
                    password_hash = COALESCE(?, password_hash),
                    updated_at = ?
                WHERE id = ?
                RETURNING id, username, email, password_hash, first_name, last_name,
                    date_joined, updated_at
            "#,
        )
        .bind(changes.username.as_deref())
        .bind(changes.email.as_deref())
        .bind(changes.first_name.as_deref())
        .bind(changes.last_name.as_deref())
        .bind(password_hash)
        .bind(updated_at)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    /// Hard delete. Returns `false` if the id is unknown.
    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Cheap round trip used by health checks
    pub async fn ping(&self) -> DbErrorResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
