// src/models/order.rs

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  pub id: i64,
  pub user_id: i64,
  pub total_amount: f64,
  pub payment_method: String,
  /// Free-form status string; new orders start as "pending".
  pub status: String,
  pub created_at: NaiveDateTime,
}
