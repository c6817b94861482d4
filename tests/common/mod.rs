#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
  body::Body,
  http::{Request, StatusCode},
  Router,
};
use http_body_util::BodyExt;
use portfolio_contact_api::{
  app::{cors_layer, create_app},
  domains::contact::service::ContactConfig,
  email::{EmailProvider, MessageId, OutboundEmail, ProviderError},
  state::SharedAppState,
};
use tower::ServiceExt;

/// Records every message and fails those whose body mentions `fail-`.
#[derive(Clone, Default)]
pub struct RecordingProvider {
  pub sent: Arc<Mutex<Vec<OutboundEmail>>>,
}

impl RecordingProvider {
  pub fn sent(&self) -> Vec<OutboundEmail> {
    self.sent.lock().expect("lock sent messages").clone()
  }
}

#[async_trait]
impl EmailProvider for RecordingProvider {
  async fn send(&self, email: &OutboundEmail) -> Result<MessageId, ProviderError> {
    tokio::task::yield_now().await;

    let id = {
      let mut sent = self.sent.lock().expect("lock sent messages");
      sent.push(email.clone());
      sent.len()
    };

    if email.html.contains("fail-") {
      return Err(ProviderError::Rejected {
        status: 429,
        reason: "rate_limit_exceeded: Too many requests".to_string(),
      });
    }

    Ok(MessageId::new(format!("msg-{}", id)))
  }
}

pub fn app_with(provider: RecordingProvider) -> Router {
  let state = SharedAppState::new(
    Arc::new(provider),
    ContactConfig {
      sender: "onboarding@resend.dev".to_string(),
      recipient: "owner@example.com".to_string(),
    },
  );
  create_app(state, cors_layer(&[]).unwrap())
}

pub async fn post_send_email(app: Router, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
  let response = app
    .oneshot(
      Request::builder()
        .method("POST")
        .uri("/api/send-email")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap(),
    )
    .await
    .unwrap();

  let status = response.status();
  let body = response.into_body().collect().await.unwrap().to_bytes();
  (status, serde_json::from_slice(&body).unwrap())
}
