use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

use watchpost_api::restful::NotificationResponse;

use crate::configs::Storage;
use crate::errors::ApiError;
use crate::repositories::NotificationRepository;

/// Page size the history list renders.
const HISTORY_PAGE_SIZE: i64 = 50;

#[derive(Clone)]
pub struct NotificationState {
    pub storage: Arc<Storage>,
}

/// `GET /users/:user_id/notifications` — newest 50 history records.
pub async fn get_notifications(
    Path(user_id): Path<String>,
    State(state): State<NotificationState>,
) -> Result<impl IntoResponse, ApiError> {
    let notifications = NotificationRepository::new(state.storage.clone())
        .find_recent(&user_id, HISTORY_PAGE_SIZE)
        .await?;

    let notifications: Vec<NotificationResponse> =
        notifications.into_iter().map(Into::into).collect();

    Ok(Json(notifications))
}
