use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

use crate::domains::contact::service::ContactServiceError;

pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send message.";

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "message": self.message,
    }));

    (self.status_code, body).into_response()
  }
}

/// Delivery details stay in the server log; callers only see a generic message.
impl From<ContactServiceError> for AppError {
  fn from(error: ContactServiceError) -> Self {
    match error {
      ContactServiceError::ValidationError(msg) => AppError::bad_request(msg),
      ContactServiceError::DeliveryError(_) => AppError::internal_server_error(DELIVERY_FAILED_MESSAGE),
    }
  }
}
