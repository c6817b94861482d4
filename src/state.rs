use std::sync::Arc;

use crate::{
  domains::contact::{
    model::SubmissionRequest,
    service::{ContactConfig, ContactService, ContactServiceError, ContactServiceImpl},
  },
  email::{EmailProvider, MessageId},
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn submit_contact(
    &self,
    req: SubmissionRequest,
  ) -> impl std::future::Future<Output = Result<MessageId, ContactServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub contact_service: Arc<ContactServiceImpl>,
}

impl SharedAppState {
  pub fn new(provider: Arc<dyn EmailProvider>, contact_config: ContactConfig) -> Self {
    let contact_service = Arc::new(ContactServiceImpl::new(provider, contact_config));

    Self { contact_service }
  }
}

impl AppState for SharedAppState {
  async fn submit_contact(&self, req: SubmissionRequest) -> Result<MessageId, ContactServiceError> {
    self.contact_service.submit_contact(req).await
  }
}
