use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::email::{
  provider::{EmailProvider, ProviderError},
  types::{MessageId, OutboundEmail, ResendConfig},
};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Delivers mail through the Resend HTTP API.
pub struct ResendProvider {
  config: ResendConfig,
  client: reqwest::Client,
}

impl ResendProvider {
  pub fn new(config: ResendConfig) -> Result<Self> {
    let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
    if let Some(secs) = config.timeout_secs {
      builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build().context("Failed to build Resend HTTP client")?;

    Ok(ResendProvider { config, client })
  }

  fn endpoint(&self) -> String {
    format!("{}/emails", self.config.base_url.trim_end_matches('/'))
  }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
  from: &'a str,
  to: [&'a str; 1],
  subject: &'a str,
  html: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
  id: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
  name: Option<String>,
  message: Option<String>,
}

impl ErrorResponse {
  fn describe(self) -> Option<String> {
    match (self.name, self.message) {
      (Some(name), Some(message)) => Some(format!("{}: {}", name, message)),
      (None, Some(message)) => Some(message),
      (Some(name), None) => Some(name),
      (None, None) => None,
    }
  }
}

#[async_trait]
impl EmailProvider for ResendProvider {
  async fn send(&self, email: &OutboundEmail) -> Result<MessageId, ProviderError> {
    let request = SendEmailRequest {
      from: &email.from,
      to: [&email.to],
      subject: &email.subject,
      html: &email.html,
    };

    let response = self
      .client
      .post(self.endpoint())
      .bearer_auth(&self.config.api_key)
      .json(&request)
      .send()
      .await
      .map_err(|e| ProviderError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
      let reason = response
        .json::<ErrorResponse>()
        .await
        .ok()
        .and_then(ErrorResponse::describe)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());

      return Err(ProviderError::Rejected {
        status: status.as_u16(),
        reason,
      });
    }

    response
      .json::<SendEmailResponse>()
      .await
      .map(|body| MessageId::new(body.id))
      .map_err(|e| ProviderError::Transport(format!("Unexpected response body: {}", e)))
  }
}
