// src/repo/products.rs

use crate::errors::Result;
use crate::models::Product;
use sqlx::SqlitePool;
use tracing::instrument;

const PRODUCT_COLUMNS: &str = "id, name, category, subcategory, price, original_price, \
                               images, rating, sizes, color, description, stock, updated_at";

#[instrument(name = "repo::products::list", skip(pool))]
pub async fn list(pool: &SqlitePool) -> Result<Vec<Product>> {
  let products = sqlx::query_as::<_, Product>(&format!(
    "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY name ASC"
  ))
  .fetch_all(pool)
  .await?;
  Ok(products)
}

#[instrument(name = "repo::products::find_by_id", skip(pool))]
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Product>> {
  let product = sqlx::query_as::<_, Product>(&format!(
    "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?"
  ))
  .bind(id)
  .fetch_optional(pool)
  .await?;
  Ok(product)
}
