// src/models/product.rs

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub category: String,
  pub subcategory: Option<String>,
  pub price: f64,
  pub original_price: Option<f64>,
  /// Comma-joined image URLs, as the frontend galleries consume them.
  pub images: String,
  pub rating: f64,
  /// Comma-joined size labels, e.g. "S,M,L,XL".
  pub sizes: String,
  pub color: Option<String>,
  pub description: Option<String>,
  pub stock: i64,
  pub updated_at: NaiveDateTime,
}
