use std::error::Error;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

/// Which sensor pipeline this agent instance runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Mailbox,
    Vibration,
    Sound,
    Presence,
    Dryer,
}

impl Modality {
    /// Function-config document name on the server.
    pub fn function_name(&self) -> &'static str {
        match self {
            Modality::Mailbox => "mailbox",
            Modality::Vibration => "vibration",
            Modality::Sound => "sound",
            Modality::Presence => "presence",
            Modality::Dryer => "dryer",
        }
    }

    /// Human label, used as the heartbeat task field.
    pub fn use_case_label(&self) -> &'static str {
        match self {
            Modality::Mailbox => "Mailbox Notifier",
            Modality::Vibration => "Vibration Sensor",
            Modality::Sound => "Sound Sensor",
            Modality::Presence => "Presence Sensor",
            Modality::Dryer => "Dryer Notifier",
        }
    }
}

/// Identity this agent registers under `PUT /users/:user_id/devices/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceIdentity {
    pub id: String,
    pub name: String,
    pub model: String,
    pub system_version: String,
    pub bundle_id: String,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub server_url: String,
    pub user_id: String,
    pub modality: Modality,
    pub device: DeviceIdentity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub agent: Agent,
}

impl Settings {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let settings = toml::from_str(include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../",
            "configs/default.toml"
        )))?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let settings = Settings::new().unwrap();

        assert_eq!(settings.agent.modality, Modality::Mailbox);
        assert!(!settings.agent.device.id.is_empty());
        assert!(settings.agent.server_url.starts_with("http"));
    }
}
