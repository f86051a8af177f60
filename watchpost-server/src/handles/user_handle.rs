use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

use watchpost_api::restful::UserStatusResponse;

use crate::configs::Storage;
use crate::errors::ApiError;
use crate::repositories::UserRepository;

#[derive(Clone)]
pub struct UserState {
    pub storage: Arc<Storage>,
}

/// `GET /users/:user_id` — the status bag clients poll or refresh on a
/// push. A user nobody has written yet reads as the all-clear default,
/// matching absent-document semantics.
pub async fn get_user_status(
    Path(user_id): Path<String>,
    State(state): State<UserState>,
) -> Result<impl IntoResponse, ApiError> {
    let user = UserRepository::new(state.storage.clone())
        .find_by_id(&user_id)
        .await?;

    let status = match user {
        Some(user) => user.into(),
        None => UserStatusResponse {
            id: user_id,
            mail_detected: false,
            mail_last_updated_at: None,
            dryer_running: false,
            dryer_last_event: None,
            dryer_last_updated_at: None,
        },
    };

    Ok(Json(status))
}
