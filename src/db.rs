// src/db.rs

//! Connection helpers for the single-file SQLite store.

use crate::errors::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// The full table schema, kept in one place so the seed binary and the tests
/// apply exactly what the server expects to pre-exist.
pub const SCHEMA_SQL: &str = include_str!("../db/schema.sql");

/// Connect to an existing store. The server never creates the database file;
/// the schema is assumed to be in place (see the `seed` binary).
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
  let options = SqliteConnectOptions::from_str(database_url).map_err(sqlx::Error::from)?;
  let pool = SqlitePoolOptions::new().connect_with(options).await?;
  Ok(pool)
}

/// Connect for seeding, creating the database file when it does not exist yet.
pub async fn connect_create(database_url: &str) -> Result<SqlitePool> {
  let options = SqliteConnectOptions::from_str(database_url)
    .map_err(sqlx::Error::from)?
    .create_if_missing(true);
  let pool = SqlitePoolOptions::new().connect_with(options).await?;
  Ok(pool)
}

/// Apply the table schema. Statements are all `CREATE TABLE IF NOT EXISTS`, so
/// re-applying over a populated store is a no-op.
pub async fn apply_schema(pool: &SqlitePool) -> Result<()> {
  sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
  Ok(())
}
