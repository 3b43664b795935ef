// src/models/user.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
  pub id: i64,
  pub name: String,
  pub email: String,
  #[serde(skip_serializing)] // Never send the password hash to a client
  pub password: String,
  pub phone: Option<String>,
  pub is_admin: bool,
  pub created_at: NaiveDateTime,
}
