// src/repo/orders.rs

use crate::errors::{AppError, Result};
use crate::models::{Order, OrderItem};
use crate::repo::carts;
use sqlx::SqlitePool;
use tracing::{info, instrument};

/// Order fields supplied by the caller; the store assigns id, status and timestamp.
#[derive(Debug)]
pub struct NewOrder {
  pub user_id: i64,
  pub payment_method: String,
  pub total_amount: f64,
}

#[derive(Debug)]
pub struct NewOrderItem {
  pub product_id: i64,
  pub quantity: i64,
}

/// Persist an order with its line items, decrement product stock (floored at
/// zero) and clear the ordering user's cart — all in one transaction, so a
/// failure part-way leaves no partial writes behind.
#[instrument(name = "repo::orders::place", skip(pool, items), fields(user_id = order.user_id, item_count = items.len()))]
pub async fn place(pool: &SqlitePool, order: &NewOrder, items: &[NewOrderItem]) -> Result<Order> {
  let mut tx = pool.begin().await?;

  let user_exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = ?)")
    .bind(order.user_id)
    .fetch_one(&mut *tx)
    .await?;
  if !user_exists {
    return Err(AppError::NotFound(format!("User with ID {} not found.", order.user_id)));
  }

  let placed = sqlx::query_as::<_, Order>(
    "INSERT INTO orders (user_id, total_amount, payment_method) VALUES (?, ?, ?) \
     RETURNING id, user_id, total_amount, payment_method, status, created_at",
  )
  .bind(order.user_id)
  .bind(order.total_amount)
  .bind(&order.payment_method)
  .fetch_one(&mut *tx)
  .await?;

  for item in items {
    // Line items carry the price at purchase time, read from the product row.
    let unit_price = sqlx::query_scalar::<_, f64>("SELECT price FROM products WHERE id = ?")
      .bind(item.product_id)
      .fetch_optional(&mut *tx)
      .await?;
    let unit_price = unit_price.ok_or_else(|| {
      AppError::NotFound(format!("Product with ID {} not found.", item.product_id))
    })?;

    sqlx::query(
      "INSERT INTO order_items (order_id, product_id, quantity, unit_price) VALUES (?, ?, ?, ?)",
    )
    .bind(placed.id)
    .bind(item.product_id)
    .bind(item.quantity)
    .bind(unit_price)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
      "UPDATE products SET stock = MAX(stock - ?, 0), updated_at = datetime('now') WHERE id = ?",
    )
    .bind(item.quantity)
    .bind(item.product_id)
    .execute(&mut *tx)
    .await?;
  }

  let cleared = carts::clear_for_user(&mut *tx, order.user_id).await?;

  tx.commit().await?;
  info!(
    order_id = placed.id,
    cart_rows_cleared = cleared,
    "Order persisted with {} line item(s).",
    items.len()
  );
  Ok(placed)
}

/// Line items belonging to an order.
#[instrument(name = "repo::orders::items_for_order", skip(pool))]
pub async fn items_for_order(pool: &SqlitePool, order_id: i64) -> Result<Vec<OrderItem>> {
  let items = sqlx::query_as::<_, OrderItem>(
    "SELECT id, order_id, product_id, quantity, unit_price FROM order_items WHERE order_id = ?",
  )
  .bind(order_id)
  .fetch_all(pool)
  .await?;
  Ok(items)
}

/// Look an order up by its store-assigned id.
#[instrument(name = "repo::orders::find_by_id", skip(pool))]
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Order>> {
  let order = sqlx::query_as::<_, Order>(
    "SELECT id, user_id, total_amount, payment_method, status, created_at FROM orders WHERE id = ?",
  )
  .bind(id)
  .fetch_optional(pool)
  .await?;
  Ok(order)
}
