use watchpost_api::models::{DryerEvent, EventType};
use watchpost_api::restful::{FunctionConfigResponse, SendNotificationRequest, SendNotificationResponse};

/// Submits detected events to the fan-out endpoint.
///
/// Fire-and-forget: failures are logged and dropped, never retried. A
/// missed push is acceptable; a stalled sampling loop is not.
pub struct EventReporter {
    client: reqwest::Client,
    server_url: String,
    user_id: String,
}

impl EventReporter {
    pub fn new(server_url: &str, user_id: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            server_url: server_url.trim_end_matches('/').to_owned(),
            user_id: user_id.to_owned(),
        }
    }

    pub async fn report(
        &self,
        event_type: EventType,
        event: Option<DryerEvent>,
        title: Option<String>,
        body: Option<String>,
    ) {
        let request = SendNotificationRequest {
            user_id: Some(self.user_id.clone()),
            event_type,
            event,
            title,
            body,
        };

        let url = format!("{}/sendNotification", self.server_url);
        match self.client.post(&url).json(&request).send().await {
            Ok(response) if response.status().is_success() => {
                match response.json::<SendNotificationResponse>().await {
                    Ok(summary) => tracing::info!(
                        "event delivered to {} device(s), {} failed",
                        summary.success_count,
                        summary.failure_count
                    ),
                    Err(error) => tracing::warn!("unreadable fan-out summary: {error}"),
                }
            }
            Ok(response) => tracing::warn!("fan-out rejected the event: {}", response.status()),
            Err(error) => tracing::warn!("fan-out unreachable: {error}"),
        }
    }

    /// Stored strings and tuning for one sensor function, if the user
    /// ever saved any. Absent config means built-in defaults apply.
    pub async fn fetch_function_config(&self, name: &str) -> Option<FunctionConfigResponse> {
        let url = format!("{}/users/{}/functions/{}", self.server_url, self.user_id, name);

        let response = self.client.get(&url).send().await.ok()?;
        if !response.status().is_success() {
            return None;
        }

        response.json().await.ok()
    }
}
