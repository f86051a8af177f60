use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use time::OffsetDateTime;

use watchpost_api::restful::{FunctionConfigResponse, SaveFunctionConfigRequest};

use crate::configs::Storage;
use crate::errors::{ApiError, FunctionError};
use crate::repositories::{FunctionConfigRepository, UserRepository};

#[derive(Clone)]
pub struct FunctionState {
    pub storage: Arc<Storage>,
}

/// `PUT /users/:user_id/functions/:name` — saves the setup form. The
/// threshold is clamped into the range the detectors accept rather than
/// rejected.
pub async fn save_function_config(
    Path((user_id, name)): Path<(String, String)>,
    State(state): State<FunctionState>,
    Json(mut request): Json<SaveFunctionConfigRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.threshold = request.threshold.map(|t| t.clamp(0.1, 1.0));

    UserRepository::new(state.storage.clone())
        .ensure(&user_id)
        .await?;

    let config = FunctionConfigRepository::new(state.storage.clone())
        .upsert(&user_id, &name, &request, OffsetDateTime::now_utc())
        .await?;

    Ok(Json(FunctionConfigResponse::from(config)))
}

/// `GET /users/:user_id/functions/:name` — read back on the next setup
/// visit.
pub async fn get_function_config(
    Path((user_id, name)): Path<(String, String)>,
    State(state): State<FunctionState>,
) -> Result<impl IntoResponse, ApiError> {
    let config = FunctionConfigRepository::new(state.storage.clone())
        .find(&user_id, &name)
        .await?
        .ok_or(FunctionError::NotFound)?;

    Ok(Json(FunctionConfigResponse::from(config)))
}
