// src/web/handlers/auth_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::repo::users;
use crate::services::auth_service;
use crate::state::AppState;

// --- Request DTO ---
// Fields are optional so that an absent field produces the contract's own
// validation message instead of a deserialization failure.
#[derive(Deserialize, Debug)]
pub struct RegisterRequestPayload {
  pub name: Option<String>,
  pub email: Option<String>,
  pub password: Option<String>,
}

fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, AppError> {
  match value.as_deref().map(str::trim) {
    Some(v) if !v.is_empty() => Ok(v),
    _ => Err(AppError::Validation(format!(
      "Please provide name, email and password; '{}' is missing.",
      field
    ))),
  }
}

#[instrument(name = "handler::register", skip(app_state, req_payload))]
pub async fn register_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<RegisterRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let name = required(&req_payload.name, "name")?;
  let email = required(&req_payload.email, "email")?;
  let password = required(&req_payload.password, "password")?;

  info!(email, "Registration attempt.");

  let password_hash = auth_service::hash_password(password)?;

  // Duplicate emails surface here as a Conflict from the store's UNIQUE
  // constraint; no lookup runs ahead of the insert.
  let new_user = users::insert(&app_state.db_pool, name, email, &password_hash).await?;

  info!(user_id = new_user.id, "User registered successfully.");

  Ok(HttpResponse::Created().json(json!({
    "message": "User registered successfully.",
    "userId": new_user.id,
  })))
}
