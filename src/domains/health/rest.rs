use axum::{response::Json as JsonResponse, routing::get, Router};
use serde::{Deserialize, Serialize};

use crate::state::SharedAppState;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
  pub status: String,
}

pub fn health_routes() -> Router<SharedAppState> {
  Router::new().route("/health", get(health_handler))
}

pub async fn health_handler() -> JsonResponse<HealthResponse> {
  JsonResponse(HealthResponse {
    status: "ok".to_string(),
  })
}
