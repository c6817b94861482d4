use anyhow::Result;
use async_trait::async_trait;
use lettre::{
  message::{header::ContentType, Mailbox},
  transport::smtp::authentication::Credentials,
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::email::{
  provider::{EmailProvider, ProviderError},
  types::{MessageId, OutboundEmail, SmtpConfig},
};

pub struct SmtpProvider {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpProvider {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    };

    Ok(SmtpProvider {
      smtp_config,
      transporter,
    })
  }

  fn build_message(email: &OutboundEmail) -> Result<Message, ProviderError> {
    let from: Mailbox = email
      .from
      .parse()
      .map_err(|e| ProviderError::InvalidMessage(format!("Invalid sender address: {}", e)))?;
    let to: Mailbox = email
      .to
      .parse()
      .map_err(|e| ProviderError::InvalidMessage(format!("Invalid recipient address: {}", e)))?;

    Message::builder()
      .from(from)
      .to(to)
      .subject(&email.subject)
      .header(ContentType::TEXT_HTML)
      .body(email.html.clone())
      .map_err(|e| ProviderError::InvalidMessage(e.to_string()))
  }
}

#[async_trait]
impl EmailProvider for SmtpProvider {
  async fn send(&self, email: &OutboundEmail) -> Result<MessageId, ProviderError> {
    let message = Self::build_message(email)?;

    let response = self.transporter.send(message).await.map_err(|e| {
      ProviderError::Transport(format!("SMTP delivery via {} failed: {}", self.smtp_config.host, e))
    })?;

    Ok(MessageId::new(response.message().collect::<Vec<_>>().join(" ")))
  }
}
