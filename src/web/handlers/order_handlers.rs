// src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::repo::orders::{self, NewOrder, NewOrderItem};
use crate::state::AppState;

// --- Request DTOs ---
// Wire names follow the frontend's camelCase payloads.

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
  pub user_id: i64,
  pub payment_method: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemPayload {
  pub product_id: i64,
  pub qty: i64,
}

#[derive(Deserialize, Debug)]
pub struct PlaceOrderRequestPayload {
  pub order: OrderPayload,
  pub items: Vec<OrderItemPayload>,
  pub total: f64,
}

#[instrument(
  name = "handler::place_order",
  skip(app_state, req_payload),
  fields(user_id = req_payload.order.user_id, item_count = req_payload.items.len())
)]
pub async fn place_order_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<PlaceOrderRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = req_payload.into_inner();

  if payload.items.is_empty() {
    warn!("Order rejected: no items in payload.");
    return Err(AppError::Validation("An order must contain at least one item.".to_string()));
  }
  if payload.items.iter().any(|item| item.qty <= 0) {
    return Err(AppError::Validation("Item quantities must be positive.".to_string()));
  }
  if payload.total < 0.0 {
    return Err(AppError::Validation("Order total cannot be negative.".to_string()));
  }

  let new_order = NewOrder {
    user_id: payload.order.user_id,
    payment_method: payload.order.payment_method.unwrap_or_else(|| "cod".to_string()),
    total_amount: payload.total,
  };
  let new_items: Vec<NewOrderItem> = payload
    .items
    .iter()
    .map(|item| NewOrderItem {
      product_id: item.product_id,
      quantity: item.qty,
    })
    .collect();

  let placed = orders::place(&app_state.db_pool, &new_order, &new_items).await?;

  info!(order_id = placed.id, "Order placed successfully.");

  Ok(HttpResponse::Ok().json(json!({
    "message": "Order placed successfully.",
    "order": placed,
  })))
}
