use anyhow::{Context, Result};
use axum::{
  http::{header, HeaderValue, Method},
  Router,
};
use tower_http::{
  cors::{AllowOrigin, Any, CorsLayer},
  trace::TraceLayer,
};

use crate::{
  domains::{contact::rest::contact_routes, health::rest::health_routes},
  state::SharedAppState,
};

pub fn create_app(state: SharedAppState, cors: CorsLayer) -> Router {
  Router::new()
    .merge(health_routes())
    .nest("/api", contact_routes())
    .layer(TraceLayer::new_for_http())
    .layer(cors)
    .with_state(state)
}

/// Builds the CORS policy. An empty origin list allows any origin.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
  let layer = CorsLayer::new()
    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
    .allow_headers([header::CONTENT_TYPE]);

  if allowed_origins.is_empty() {
    return Ok(layer.allow_origin(Any));
  }

  let origins = allowed_origins
    .iter()
    .map(|origin| {
      origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", origin))
    })
    .collect::<Result<Vec<_>>>()?;

  Ok(layer.allow_origin(AllowOrigin::list(origins)))
}
