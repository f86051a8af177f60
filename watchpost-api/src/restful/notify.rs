use serde::{Deserialize, Serialize};

use crate::models::{DryerEvent, EventType};

/// Body of `POST /sendNotification`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationRequest {
    /// Target user. Required; the server rejects requests without it.
    pub user_id: Option<String>,
    /// Event kind, defaulting to mail so old callers keep working.
    #[serde(rename = "type", default)]
    pub event_type: EventType,
    /// Phase for sustained-activity events.
    #[serde(default)]
    pub event: Option<DryerEvent>,
    /// Caller override; wins over the type-derived default.
    #[serde(default)]
    pub title: Option<String>,
    /// Caller override; wins over the type-derived default.
    #[serde(default)]
    pub body: Option<String>,
}

/// Per-token delivery outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDetail {
    pub token: String,
    pub success: bool,
    pub error_code: Option<String>,
    pub error_msg: Option<String>,
}

/// Summary returned for a fan-out request, mixed results included.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationResponse {
    pub success_count: usize,
    pub failure_count: usize,
    pub details: Vec<DeliveryDetail>,
}

/// Error body for rejected or failed requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: Option<String>,
    pub message: String,
}
