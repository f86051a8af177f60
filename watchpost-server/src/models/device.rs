use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use watchpost_api::restful::DeviceResponse;

use super::Table;

/// One registered install of the app, upserted on token registration and
/// on every heartbeat. Eligible for push delivery iff `is_active` and
/// `token` is non-null.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Device {
    pub user_id: String,
    pub id: String,
    pub name: Option<String>,
    pub model: Option<String>,
    pub system_version: Option<String>,
    pub bundle_id: Option<String>,
    pub token: Option<String>,
    pub is_active: bool,
    pub is_listening: bool,
    pub task: Option<String>,
    pub battery: Option<i32>,
    pub updated_at: OffsetDateTime,
}

impl From<Device> for DeviceResponse {
    fn from(device: Device) -> Self {
        Self {
            id: device.id,
            name: device.name,
            model: device.model,
            system_version: device.system_version,
            bundle_id: device.bundle_id,
            token: device.token,
            is_active: device.is_active,
            is_listening: device.is_listening,
            task: device.task,
            battery: device.battery,
            updated_at: device.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct DeviceTable;

impl Table for DeviceTable {
    fn name(&self) -> &'static str {
        "devices"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS devices (
                user_id TEXT NOT NULL,
                id TEXT NOT NULL,
                name TEXT,
                model TEXT,
                system_version TEXT,
                bundle_id TEXT,
                token TEXT,
                is_active BOOLEAN NOT NULL DEFAULT TRUE,
                is_listening BOOLEAN NOT NULL DEFAULT FALSE,
                task TEXT,
                battery INTEGER,
                updated_at TIMESTAMP NOT NULL,
                PRIMARY KEY (user_id, id),
                FOREIGN KEY (user_id) REFERENCES users (id) ON DELETE CASCADE
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS devices;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["users"]
    }
}
