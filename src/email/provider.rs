use async_trait::async_trait;
use thiserror::Error;

use super::types::{MessageId, OutboundEmail};

#[derive(Debug, Error)]
pub enum ProviderError {
  #[error("transport failure: {0}")]
  Transport(String),
  #[error("provider rejected message ({status}): {reason}")]
  Rejected { status: u16, reason: String },
  #[error("invalid message: {0}")]
  InvalidMessage(String),
}

/// A transactional email backend. Each call to `send` is a single delivery attempt.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailProvider: Send + Sync {
  async fn send(&self, email: &OutboundEmail) -> Result<MessageId, ProviderError>;
}
