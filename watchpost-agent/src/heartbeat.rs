use std::time::Duration;

use watchpost_api::restful::UpsertDeviceRequest;

use crate::settings::DeviceIdentity;

pub const HEARTBEAT_PERIOD: Duration = Duration::from_secs(60);

/// Keeps the server's device document current: one full registration
/// beat at startup, then periodic listening/battery beats, all through
/// the same merge upsert.
pub struct DeviceHeartbeat {
    client: reqwest::Client,
    url: String,
    device: DeviceIdentity,
}

impl DeviceHeartbeat {
    pub fn new(server_url: &str, user_id: &str, device: DeviceIdentity) -> Self {
        let url = format!(
            "{}/users/{}/devices/{}",
            server_url.trim_end_matches('/'),
            user_id,
            device.id
        );

        Self {
            client: reqwest::Client::new(),
            url,
            device,
        }
    }

    /// Full identity plus push token; marks the device active.
    pub async fn register(&self) {
        self.put(UpsertDeviceRequest {
            name: Some(self.device.name.clone()),
            model: Some(self.device.model.clone()),
            system_version: Some(self.device.system_version.clone()),
            bundle_id: Some(self.device.bundle_id.clone()),
            token: self.device.token.clone(),
            is_active: Some(true),
            ..Default::default()
        })
        .await;
    }

    /// Listening flag, task label and battery only; everything else
    /// keeps its stored value.
    pub async fn beat(&self, listening: bool, task: Option<&str>, battery: i32) {
        self.put(UpsertDeviceRequest {
            is_listening: Some(listening),
            task: task.map(str::to_owned),
            battery: Some(battery),
            ..Default::default()
        })
        .await;
    }

    async fn put(&self, request: UpsertDeviceRequest) {
        match self.client.put(&self.url).json(&request).send().await {
            Ok(response) if response.status().is_success() => {}
            Ok(response) => tracing::warn!("heartbeat rejected: {}", response.status()),
            Err(error) => tracing::warn!("heartbeat unreachable: {error}"),
        }
    }
}

/// Simulated battery drain from a full charge at session start.
pub fn battery_level(elapsed: Duration) -> i32 {
    (100 - (elapsed.as_secs() / 360) as i32).max(5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battery_drains_slowly_and_never_hits_zero() {
        assert_eq!(battery_level(Duration::ZERO), 100);
        assert_eq!(battery_level(Duration::from_secs(3600)), 90);
        assert_eq!(battery_level(Duration::from_secs(200_000)), 5);
    }
}
