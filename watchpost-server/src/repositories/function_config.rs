use std::sync::Arc;

use sqlx::Error;
use time::OffsetDateTime;

use watchpost_api::restful::SaveFunctionConfigRequest;

use crate::configs::Storage;
use crate::models::FunctionConfig;

pub struct FunctionConfigRepository {
    storage: Arc<Storage>,
}

impl FunctionConfigRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub async fn upsert(
        &self,
        user_id: &str,
        name: &str,
        item: &SaveFunctionConfigRequest,
        at: OffsetDateTime,
    ) -> Result<FunctionConfig, Error> {
        let config: FunctionConfig = sqlx::query_as(
            r#"
            INSERT INTO function_configs (
                user_id, name, use_case_name, notification_title,
                notification_body, threshold, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id, name) DO UPDATE SET
                use_case_name = $3,
                notification_title = $4,
                notification_body = $5,
                threshold = $6,
                updated_at = $7
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(&item.use_case_name)
        .bind(&item.notification_title)
        .bind(&item.notification_body)
        .bind(item.threshold)
        .bind(at)
        .fetch_one(self.storage.get_pool())
        .await?;

        Ok(config)
    }

    pub async fn find(&self, user_id: &str, name: &str) -> Result<Option<FunctionConfig>, Error> {
        let config: Option<FunctionConfig> = sqlx::query_as(
            "SELECT * FROM function_configs WHERE user_id = $1 AND name = $2",
        )
        .bind(user_id)
        .bind(name)
        .fetch_optional(self.storage.get_pool())
        .await?;

        Ok(config)
    }
}
