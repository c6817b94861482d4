//! Outbound email delivery
//!
//! Contact submissions leave the service through an [`EmailProvider`]. Two
//! backends exist: the Resend HTTP API (default) and plain SMTP via lettre.

mod provider;
mod resend;
mod smtp;
mod types;

#[cfg(test)]
pub use provider::MockEmailProvider;
pub use provider::{EmailProvider, ProviderError};
pub use resend::ResendProvider;
pub use smtp::SmtpProvider;
pub use types::{MessageId, OutboundEmail, ResendConfig, SmtpConfig};
