use std::sync::Arc;

use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use crate::{
  app::{cors_layer, create_app},
  domains::contact::service::ContactConfig,
  email::EmailProvider,
  state::SharedAppState,
};

pub fn test_contact_config() -> ContactConfig {
  ContactConfig {
    sender: "onboarding@resend.dev".to_string(),
    recipient: "owner@example.com".to_string(),
  }
}

pub fn app_with_provider_and_cors<P: EmailProvider + 'static>(provider: P, cors: CorsLayer) -> Router {
  let state = SharedAppState::new(Arc::new(provider), test_contact_config());
  create_app(state, cors)
}

pub fn app_with_provider<P: EmailProvider + 'static>(provider: P) -> Router {
  app_with_provider_and_cors(provider, cors_layer(&[]).expect("default cors layer"))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  send(app, request).await
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: &'static str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", content_type)
    .body(Body::from(body))
    .expect("build request");

  send(app, request).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("GET")
    .uri(uri)
    .body(Body::empty())
    .expect("build request");

  send(app, request).await
}
