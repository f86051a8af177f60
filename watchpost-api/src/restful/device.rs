use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Body of `PUT /users/:user_id/devices/:device_id`.
///
/// Create-or-merge: absent fields leave stored values untouched, so the
/// same endpoint serves token registration, listening-state transitions
/// and the periodic heartbeat.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertDeviceRequest {
    pub name: Option<String>,
    pub model: Option<String>,
    pub system_version: Option<String>,
    #[serde(rename = "bundleID")]
    pub bundle_id: Option<String>,
    /// Push token; absent until registration with the push provider
    /// completes.
    pub token: Option<String>,
    pub is_active: Option<bool>,
    pub is_listening: Option<bool>,
    /// Human label of the detector currently running on the device.
    pub task: Option<String>,
    /// Battery percentage, 0..=100.
    pub battery: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceResponse {
    pub id: String,
    pub name: Option<String>,
    pub model: Option<String>,
    pub system_version: Option<String>,
    #[serde(rename = "bundleID")]
    pub bundle_id: Option<String>,
    pub token: Option<String>,
    pub is_active: bool,
    pub is_listening: bool,
    pub task: Option<String>,
    pub battery: Option<i32>,
    pub updated_at: OffsetDateTime,
}
