use std::sync::Arc;

use crate::{
  config::ProviderConfig,
  email::{EmailProvider, ResendProvider, SmtpProvider},
};

pub mod error;

pub fn init_email_provider(config: &ProviderConfig) -> anyhow::Result<Arc<dyn EmailProvider>> {
  let provider: Arc<dyn EmailProvider> = match config {
    ProviderConfig::Resend(resend_config) => {
      tracing::info!("Using Resend email provider at {}", resend_config.base_url);
      Arc::new(ResendProvider::new(resend_config.clone())?)
    }
    ProviderConfig::Smtp(smtp_config) => {
      tracing::info!("Using SMTP email provider at {}:{}", smtp_config.host, smtp_config.port);
      Arc::new(SmtpProvider::new(smtp_config.clone())?)
    }
  };

  Ok(provider)
}
