// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use boutique_api::config::AppConfig;
use boutique_api::db;
use boutique_api::state::AppState;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Fresh in-memory store with the schema applied. A single connection keeps
/// every query in the test on the same in-memory database.
pub async fn test_pool() -> SqlitePool {
  let pool = SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("failed to open in-memory store");
  db::apply_schema(&pool).await.expect("failed to apply schema");
  pool
}

pub fn test_state(pool: SqlitePool) -> AppState {
  AppState {
    db_pool: pool,
    config: Arc::new(AppConfig {
      server_host: "127.0.0.1".to_string(),
      server_port: 0,
      database_url: "sqlite::memory:".to_string(),
    }),
  }
}

pub async fn insert_user(pool: &SqlitePool, name: &str, email: &str) -> i64 {
  sqlx::query_scalar::<_, i64>(
    "INSERT INTO users (name, email, password) VALUES (?, ?, 'x-not-a-real-hash') RETURNING id",
  )
  .bind(name)
  .bind(email)
  .fetch_one(pool)
  .await
  .expect("failed to insert test user")
}

pub async fn insert_product(pool: &SqlitePool, name: &str, price: f64, stock: i64) -> i64 {
  sqlx::query_scalar::<_, i64>(
    "INSERT INTO products (name, category, price, stock) VALUES (?, 'Test', ?, ?) RETURNING id",
  )
  .bind(name)
  .bind(price)
  .bind(stock)
  .fetch_one(pool)
  .await
  .expect("failed to insert test product")
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
  sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
    .fetch_one(pool)
    .await
    .expect("failed to count rows")
}

pub async fn product_stock(pool: &SqlitePool, product_id: i64) -> i64 {
  sqlx::query_scalar::<_, i64>("SELECT stock FROM products WHERE id = ?")
    .bind(product_id)
    .fetch_one(pool)
    .await
    .expect("failed to read product stock")
}
