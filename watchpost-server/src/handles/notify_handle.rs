use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;

use watchpost_api::restful::SendNotificationRequest;

use crate::errors::{ApiError, NotifyError};
use crate::services::{EventSubmission, FanoutService};

#[derive(Clone)]
pub struct NotifyState {
    pub fanout: Arc<FanoutService>,
}

/// `POST /sendNotification` — validates the submission, then hands it to
/// the fan-out service. Validation happens before any side effect; the
/// body is taken raw so a wrong content type rejects with 400 rather than
/// the extractor's default.
pub async fn send_notification(
    State(state): State<NotifyState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if !content_type.starts_with("application/json") {
        return Err(NotifyError::UnsupportedContentType.into());
    }

    let request: SendNotificationRequest = serde_json::from_slice(&body)
        .map_err(|e| NotifyError::InvalidJson(e.to_string()))?;

    let user_id = request
        .user_id
        .filter(|id| !id.is_empty())
        .ok_or(NotifyError::MissingUserId)?;

    let summary = state
        .fanout
        .dispatch(EventSubmission {
            user_id,
            event_type: request.event_type,
            event: request.event,
            title: request.title,
            body: request.body,
        })
        .await?;

    Ok(Json(summary))
}
