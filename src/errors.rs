// src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Conflict: {0}")]
  Conflict(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response; storage faults never
    // leak query detail to the caller.
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({ "message": m })),
      // Duplicate email is a client error on the documented contract, so 400 rather than 409.
      AppError::Conflict(m) => HttpResponse::BadRequest().json(json!({ "message": m })),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({ "message": m })),
      AppError::Config(_) => {
        HttpResponse::InternalServerError().json(json!({ "message": "Configuration issue" }))
      }
      AppError::Sqlx(_) => {
        HttpResponse::InternalServerError().json(json!({ "message": "Database operation failed" }))
      }
      AppError::Internal(_) => {
        HttpResponse::InternalServerError().json(json!({ "message": "An internal error occurred" }))
      }
    }
  }
}

// Result type alias for the application.
pub type Result<T, E = AppError> = std::result::Result<T, E>;
