use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::models::{DryerEvent, EventType};

/// The per-user status bag clients react to.
///
/// A user who has never produced an event reads as the default, mirroring
/// the absent-document semantics of the original store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatusResponse {
    pub id: String,
    pub mail_detected: bool,
    pub mail_last_updated_at: Option<OffsetDateTime>,
    pub dryer_running: bool,
    pub dryer_last_event: Option<DryerEvent>,
    pub dryer_last_updated_at: Option<OffsetDateTime>,
}

/// One immutable history record, newest first in listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub event: Option<DryerEvent>,
    pub created_at: OffsetDateTime,
}
