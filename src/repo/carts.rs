// src/repo/carts.rs

use crate::errors::Result;
use crate::models::CartItem;
use sqlx::{Sqlite, SqlitePool};
use tracing::instrument;

/// Put an item into a user's cart.
#[instrument(name = "repo::carts::add_item", skip(pool))]
pub async fn add_item(pool: &SqlitePool, user_id: i64, product_id: i64, quantity: i64) -> Result<CartItem> {
  let item = sqlx::query_as::<_, CartItem>(
    "INSERT INTO cart_items (user_id, product_id, quantity) VALUES (?, ?, ?) \
     RETURNING id, user_id, product_id, quantity, added_at",
  )
  .bind(user_id)
  .bind(product_id)
  .bind(quantity)
  .fetch_one(pool)
  .await?;
  Ok(item)
}

/// Remove every cart row belonging to a user. Takes any executor so order
/// intake can run it inside its transaction.
pub async fn clear_for_user<'e, E>(executor: E, user_id: i64) -> Result<u64>
where
  E: sqlx::Executor<'e, Database = Sqlite>,
{
  let result = sqlx::query("DELETE FROM cart_items WHERE user_id = ?")
    .bind(user_id)
    .execute(executor)
    .await?;
  Ok(result.rows_affected())
}

/// How many cart rows a user currently has.
#[instrument(name = "repo::carts::count_for_user", skip(pool))]
pub async fn count_for_user(pool: &SqlitePool, user_id: i64) -> Result<i64> {
  let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cart_items WHERE user_id = ?")
    .bind(user_id)
    .fetch_one(pool)
    .await?;
  Ok(count)
}
