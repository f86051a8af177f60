use std::sync::Arc;

use time::OffsetDateTime;

use watchpost_api::models::{DryerEvent, EventType};
use watchpost_api::restful::SendNotificationResponse;

use crate::configs::Storage;
use crate::errors::ApiError;
use crate::repositories::{DeviceRepository, NotificationRepository, UserRepository};
use crate::services::PushGateway;

/// A validated event submission: `user_id` is present, defaults not yet
/// applied.
#[derive(Debug, Clone)]
pub struct EventSubmission {
    pub user_id: String,
    pub event_type: EventType,
    pub event: Option<DryerEvent>,
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Fans one detected event out to every eligible device of a user.
///
/// Stateless per request and deliberately free of deduplication: the
/// on-device cooldown logic is the at-least-once boundary, so a repeated
/// submission legitimately produces a second push batch and a second
/// history record.
pub struct FanoutService {
    users: UserRepository,
    devices: DeviceRepository,
    notifications: NotificationRepository,
    push: Arc<dyn PushGateway>,
}

impl FanoutService {
    pub fn new(storage: Arc<Storage>, push: Arc<dyn PushGateway>) -> Self {
        Self {
            users: UserRepository::new(storage.clone()),
            devices: DeviceRepository::new(storage.clone()),
            notifications: NotificationRepository::new(storage),
            push,
        }
    }

    pub async fn dispatch(
        &self,
        submission: EventSubmission,
    ) -> Result<SendNotificationResponse, ApiError> {
        let EventSubmission {
            user_id,
            event_type,
            event,
            title,
            body,
        } = submission;

        tracing::info!(
            user_id = %user_id,
            event_type = %event_type,
            event = ?event,
            "dispatching event"
        );

        // Caller-supplied title/body always win over the type defaults.
        let title = title.unwrap_or_else(|| event_type.default_title().to_string());
        let body = body.unwrap_or_else(|| event_type.default_body(event).to_string());

        let now = OffsetDateTime::now_utc();

        match event_type {
            EventType::Mail => {
                self.users.mark_mail_detected(&user_id, now).await?;
            }
            EventType::Dryer => {
                let running = event == Some(DryerEvent::Started);
                let event_label = event.map(|e| e.to_string());
                self.users
                    .set_dryer_state(&user_id, running, event_label.as_deref(), now)
                    .await?;
            }
        }

        let tokens = self.devices.find_active_tokens(&user_id).await?;
        if tokens.is_empty() {
            tracing::warn!(user_id = %user_id, "no active tokens; history still recorded");
        }

        // Partial delivery failure is data in the summary, never a request
        // failure.
        let details = if tokens.is_empty() {
            Vec::new()
        } else {
            self.push.send_multicast(&tokens, &title, &body).await?
        };

        let success_count = details.iter().filter(|d| d.success).count();
        let failure_count = details.len() - success_count;

        // History is appended unconditionally so the in-app list agrees
        // with "an event occurred" even when nothing was deliverable.
        self.notifications
            .create(
                &user_id,
                &title,
                &body,
                &event_type.to_string(),
                event.map(|e| e.to_string()).as_deref(),
                now,
            )
            .await?;

        tracing::info!(
            user_id = %user_id,
            success_count,
            failure_count,
            "push batch resolved"
        );

        Ok(SendNotificationResponse {
            success_count,
            failure_count,
            details,
        })
    }
}
