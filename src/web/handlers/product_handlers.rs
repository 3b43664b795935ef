// src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::repo::products;
use crate::state::AppState;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = products::list(&app_state.db_pool).await?;

  info!("Fetched {} products.", products.len());

  Ok(HttpResponse::Ok().json(json!({
    "message": "Products fetched successfully.",
    "products": products,
  })))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = *path))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  match products::find_by_id(&app_state.db_pool, product_id).await? {
    Some(product) => Ok(HttpResponse::Ok().json(json!({
      "message": "Product fetched successfully.",
      "product": product,
    }))),
    None => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)))
    }
  }
}
