use std::env;

use anyhow::{bail, Context, Result};
use lettre::message::Mailbox;

use crate::{
  domains::contact::service::ContactConfig,
  email::{ResendConfig, SmtpConfig},
};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_SENDER: &str = "onboarding@resend.dev";

#[derive(Debug, Clone)]
pub enum ProviderConfig {
  Resend(ResendConfig),
  Smtp(SmtpConfig),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub port: u16,
  pub allowed_origins: Vec<String>,
  pub contact: ContactConfig,
  pub provider: ProviderConfig,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Empty values are treated as unset.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
    let required = |key: &str| var(key).with_context(|| format!("{} environment variable must be set.", key));

    let port = match var("PORT") {
      Some(port) => port.parse().with_context(|| format!("Invalid PORT: {}", port))?,
      None => DEFAULT_PORT,
    };

    let allowed_origins = var("CORS_ALLOWED_ORIGINS")
      .map(|origins| {
        origins
          .split(',')
          .map(str::trim)
          .filter(|origin| !origin.is_empty())
          .map(String::from)
          .collect()
      })
      .unwrap_or_default();

    let contact = ContactConfig {
      sender: var("CONTACT_SENDER").unwrap_or_else(|| DEFAULT_SENDER.to_string()),
      recipient: required("CONTACT_RECIPIENT")?,
    };

    for (key, address) in [("CONTACT_SENDER", &contact.sender), ("CONTACT_RECIPIENT", &contact.recipient)] {
      address
        .parse::<Mailbox>()
        .with_context(|| format!("Invalid {} address: {}", key, address))?;
    }

    let provider_name = var("EMAIL_PROVIDER").unwrap_or_else(|| "resend".to_string());
    let provider = match provider_name.to_ascii_lowercase().as_str() {
      "resend" => {
        let timeout_secs = match var("PROVIDER_TIMEOUT_SECS") {
          Some(secs) => Some(
            secs
              .parse()
              .with_context(|| format!("Invalid PROVIDER_TIMEOUT_SECS: {}", secs))?,
          ),
          None => None,
        };

        ProviderConfig::Resend(ResendConfig {
          api_key: required("RESEND_API_KEY")?,
          base_url: var("RESEND_BASE_URL").unwrap_or_else(|| ResendConfig::DEFAULT_BASE_URL.to_string()),
          timeout_secs,
        })
      }
      "smtp" => {
        let defaults = SmtpConfig::default();
        let port = match var("SMTP_PORT") {
          Some(port) => port.parse().with_context(|| format!("Invalid SMTP_PORT: {}", port))?,
          None => defaults.port,
        };

        ProviderConfig::Smtp(SmtpConfig {
          host: var("SMTP_HOST").unwrap_or(defaults.host),
          port,
          username: required("SMTP_USERNAME")?,
          password: required("SMTP_PASSWORD")?,
        })
      }
      other => bail!("Unknown EMAIL_PROVIDER: {} (expected \"resend\" or \"smtp\")", other),
    };

    Ok(AppConfig {
      port,
      allowed_origins,
      contact,
      provider,
    })
  }
}
