// src/repo/users.rs

use crate::errors::{AppError, Result};
use crate::models::User;
use sqlx::SqlitePool;
use tracing::instrument;

/// Insert a new user row and return it.
///
/// Email uniqueness lives in the store as a UNIQUE constraint; a violation of
/// that constraint is the single source of truth for "account already exists",
/// so there is no separate lookup racing against the insert.
#[instrument(name = "repo::users::insert", skip(pool, password_hash))]
pub async fn insert(pool: &SqlitePool, name: &str, email: &str, password_hash: &str) -> Result<User> {
  let result = sqlx::query_as::<_, User>(
    "INSERT INTO users (name, email, password) VALUES (?, ?, ?) \
     RETURNING id, name, email, password, phone, is_admin, created_at",
  )
  .bind(name)
  .bind(email)
  .bind(password_hash)
  .fetch_one(pool)
  .await;

  match result {
    Ok(user) => Ok(user),
    Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
      tracing::warn!(email, "Attempt to register an already existing email.");
      Err(AppError::Conflict("An account with this email already exists.".to_string()))
    }
    Err(e) => Err(AppError::Sqlx(e)),
  }
}

/// Look a user up by their email, the business key.
#[instrument(name = "repo::users::find_by_email", skip(pool))]
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>> {
  let user = sqlx::query_as::<_, User>(
    "SELECT id, name, email, password, phone, is_admin, created_at FROM users WHERE email = ?",
  )
  .bind(email)
  .fetch_optional(pool)
  .await?;
  Ok(user)
}
