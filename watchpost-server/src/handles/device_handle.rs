use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use time::OffsetDateTime;

use watchpost_api::restful::{DeviceResponse, UpsertDeviceRequest};

use crate::configs::Storage;
use crate::errors::{ApiError, DeviceError};
use crate::repositories::{DeviceRepository, UserRepository};

#[derive(Clone)]
pub struct DeviceState {
    pub storage: Arc<Storage>,
}

/// `PUT /users/:user_id/devices/:device_id` — registration, heartbeat and
/// listening-state transitions all land here as create-or-merge upserts.
pub async fn upsert_device(
    Path((user_id, device_id)): Path<(String, String)>,
    State(state): State<DeviceState>,
    Json(request): Json<UpsertDeviceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(battery) = request.battery {
        if !(0..=100).contains(&battery) {
            return Err(DeviceError::InvalidBattery.into());
        }
    }

    UserRepository::new(state.storage.clone())
        .ensure(&user_id)
        .await?;

    let device = DeviceRepository::new(state.storage.clone())
        .upsert(&user_id, &device_id, &request, OffsetDateTime::now_utc())
        .await?;

    Ok(Json(DeviceResponse::from(device)))
}

/// `GET /users/:user_id/devices` — most recently heard-from first.
pub async fn get_devices(
    Path(user_id): Path<String>,
    State(state): State<DeviceState>,
) -> Result<impl IntoResponse, ApiError> {
    let devices = DeviceRepository::new(state.storage.clone())
        .find_by_user(&user_id)
        .await?;

    let devices: Vec<DeviceResponse> = devices.into_iter().map(Into::into).collect();

    Ok(Json(devices))
}
