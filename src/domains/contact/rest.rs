use axum::{
  extract::{rejection::JsonRejection, Json, State},
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::{
  model::{ContactResponse, SubmissionRequest},
  service::REQUIRED_FIELDS_MESSAGE,
};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub const SUCCESS_MESSAGE: &str = "Email sent successfully.";

pub fn contact_routes() -> Router<SharedAppState> {
  Router::new().route("/send-email", post(send_email_handler))
}

/// A body that is not a JSON object of string fields carries no usable
/// fields, so it is reported the same way as a form with empty fields.
pub async fn send_email_handler(
  State(state): State<SharedAppState>,
  payload: Result<Json<SubmissionRequest>, JsonRejection>,
) -> Result<JsonResponse<ContactResponse>, AppError> {
  let Json(payload) = payload.map_err(|rejection| {
    tracing::debug!("Rejected contact payload: {}", rejection);
    AppError::bad_request(REQUIRED_FIELDS_MESSAGE)
  })?;

  state.submit_contact(payload).await?;

  Ok(JsonResponse(ContactResponse::new(SUCCESS_MESSAGE)))
}
