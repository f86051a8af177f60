use std::sync::Arc;

use sqlx::Error;
use time::OffsetDateTime;

use watchpost_api::restful::UpsertDeviceRequest;

use crate::configs::Storage;
use crate::models::Device;

pub struct DeviceRepository {
    storage: Arc<Storage>,
}

impl DeviceRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    /// Create-or-merge: absent request fields keep whatever is stored,
    /// `updated_at` always moves forward. A fresh row defaults to active
    /// and not listening.
    pub async fn upsert(
        &self,
        user_id: &str,
        device_id: &str,
        item: &UpsertDeviceRequest,
        at: OffsetDateTime,
    ) -> Result<Device, Error> {
        let device: Device = sqlx::query_as(
            r#"
            INSERT INTO devices (
                user_id, id, name, model, system_version, bundle_id, token,
                is_active, is_listening, task, battery, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7,
                    COALESCE($8, TRUE), COALESCE($9, FALSE), $10, $11, $12)
            ON CONFLICT (user_id, id) DO UPDATE SET
                name = COALESCE($3, devices.name),
                model = COALESCE($4, devices.model),
                system_version = COALESCE($5, devices.system_version),
                bundle_id = COALESCE($6, devices.bundle_id),
                token = COALESCE($7, devices.token),
                is_active = COALESCE($8, devices.is_active),
                is_listening = COALESCE($9, devices.is_listening),
                task = COALESCE($10, devices.task),
                battery = COALESCE($11, devices.battery),
                updated_at = $12
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(device_id)
        .bind(&item.name)
        .bind(&item.model)
        .bind(&item.system_version)
        .bind(&item.bundle_id)
        .bind(&item.token)
        .bind(item.is_active)
        .bind(item.is_listening)
        .bind(&item.task)
        .bind(item.battery)
        .bind(at)
        .fetch_one(self.storage.get_pool())
        .await?;

        Ok(device)
    }

    pub async fn find_by_user(&self, user_id: &str) -> Result<Vec<Device>, Error> {
        let devices: Vec<Device> = sqlx::query_as(
            "SELECT * FROM devices WHERE user_id = $1 ORDER BY updated_at DESC",
        )
        .bind(user_id)
        .fetch_all(self.storage.get_pool())
        .await?;

        Ok(devices)
    }

    /// Tokens eligible for push delivery: active devices with a completed
    /// registration.
    pub async fn find_active_tokens(&self, user_id: &str) -> Result<Vec<String>, Error> {
        let tokens: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT token FROM devices
            WHERE user_id = $1 AND is_active = TRUE AND token IS NOT NULL
            ORDER BY updated_at
            "#,
        )
        .bind(user_id)
        .fetch_all(self.storage.get_pool())
        .await?;

        Ok(tokens)
    }
}
