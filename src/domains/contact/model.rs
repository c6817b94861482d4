use serde::{Deserialize, Serialize};
use validator::Validate;

/// Contact form payload as received on the wire. Absent, `null` and empty
/// fields are all treated as missing.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct SubmissionRequest {
  #[serde(skip_serializing_if = "Option::is_none")]
  #[validate(required, length(min = 1))]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  #[validate(required, length(min = 1))]
  pub email: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  #[validate(required, length(min = 1))]
  pub message: Option<String>,
}

#[cfg(test)]
impl SubmissionRequest {
  pub fn new(name: &str, email: &str, message: &str) -> Self {
    SubmissionRequest {
      name: Some(name.to_string()),
      email: Some(email.to_string()),
      message: Some(message.to_string()),
    }
  }
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
  pub name: String,
  pub email: String,
  pub message: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactResponse {
  pub message: String,
}

impl ContactResponse {
  pub fn new(message: impl Into<String>) -> Self {
    ContactResponse {
      message: message.into(),
    }
  }
}
