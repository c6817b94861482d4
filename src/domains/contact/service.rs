use askama::Template;
use async_trait::async_trait;
use std::{error::Error, sync::Arc};
use validator::Validate;

use super::model::{ContactMessage, SubmissionRequest};
use crate::email::{EmailProvider, MessageId, OutboundEmail};

pub const CONTACT_SUBJECT: &str = "New Contact Form Message";
pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required.";

/// Fixed identities used for every relayed message.
#[derive(Debug, Clone)]
pub struct ContactConfig {
  pub sender: String,
  pub recipient: String,
}

#[derive(Debug)]
pub enum ContactServiceError {
  ValidationError(String),
  DeliveryError(String),
}

impl Error for ContactServiceError {}

impl std::fmt::Display for ContactServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ContactServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      ContactServiceError::DeliveryError(msg) => write!(f, "Delivery Error: {}", msg),
    }
  }
}

/// HTML body of the relayed message. Submitter values are auto-escaped.
#[derive(Template)]
#[template(path = "contact_email.html")]
struct ContactEmailTemplate<'a> {
  name: &'a str,
  email: &'a str,
  message: &'a str,
}

#[async_trait]
pub trait ContactService: Send + Sync {
  async fn submit_contact(&self, req: SubmissionRequest) -> Result<MessageId, ContactServiceError>;
}

pub struct ContactServiceImpl {
  provider: Arc<dyn EmailProvider>,
  config: ContactConfig,
}

impl ContactServiceImpl {
  pub fn new(provider: Arc<dyn EmailProvider>, config: ContactConfig) -> Self {
    Self { provider, config }
  }

  fn validate(req: SubmissionRequest) -> Result<ContactMessage, ContactServiceError> {
    let missing = || ContactServiceError::ValidationError(REQUIRED_FIELDS_MESSAGE.to_string());

    req.validate().map_err(|_| missing())?;

    match (req.name, req.email, req.message) {
      (Some(name), Some(email), Some(message)) => Ok(ContactMessage { name, email, message }),
      _ => Err(missing()),
    }
  }

  pub fn compose_email(&self, contact: &ContactMessage) -> Result<OutboundEmail, ContactServiceError> {
    let html = ContactEmailTemplate {
      name: &contact.name,
      email: &contact.email,
      message: &contact.message,
    }
    .render()
    .map_err(|e| ContactServiceError::DeliveryError(format!("Failed to render email body: {}", e)))?;

    Ok(OutboundEmail::new(
      self.config.sender.clone(),
      self.config.recipient.clone(),
      CONTACT_SUBJECT.to_string(),
      html,
    ))
  }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
  async fn submit_contact(&self, req: SubmissionRequest) -> Result<MessageId, ContactServiceError> {
    let contact = Self::validate(req)?;
    let email = self.compose_email(&contact).inspect_err(|e| tracing::error!("{}", e))?;

    match self.provider.send(&email).await {
      Ok(id) => {
        tracing::info!("Contact message delivered (id: {})", id);
        Ok(id)
      }
      Err(e) => {
        tracing::error!("Failed to deliver contact message: {}", e);
        Err(ContactServiceError::DeliveryError(e.to_string()))
      }
    }
  }
}
