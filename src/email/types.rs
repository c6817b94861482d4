use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      username: "".to_string(),
      password: "".to_string(),
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResendConfig {
  pub api_key: String,
  pub base_url: String,
  pub timeout_secs: Option<u64>,
}

impl ResendConfig {
  pub const DEFAULT_BASE_URL: &'static str = "https://api.resend.com";

  pub fn new(api_key: impl Into<String>) -> Self {
    ResendConfig {
      api_key: api_key.into(),
      base_url: Self::DEFAULT_BASE_URL.to_string(),
      timeout_secs: None,
    }
  }
}

/// A fully composed message ready to be handed to a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundEmail {
  pub from: String,
  pub to: String,
  pub subject: String,
  pub html: String,
}

impl OutboundEmail {
  pub fn new(from: String, to: String, subject: String, html: String) -> Self {
    OutboundEmail { from, to, subject, html }
  }
}

/// Identifier the provider assigned to an accepted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageId(String);

impl MessageId {
  pub fn new(id: impl Into<String>) -> Self {
    MessageId(id.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for MessageId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
