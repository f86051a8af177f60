use std::sync::Arc;

use sqlx::Error;
use time::OffsetDateTime;

use crate::configs::Storage;
use crate::models::Notification;

pub struct NotificationRepository {
    storage: Arc<Storage>,
}

impl NotificationRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    /// Append one immutable history record.
    pub async fn create(
        &self,
        user_id: &str,
        title: &str,
        body: &str,
        event_type: &str,
        event: Option<&str>,
        created_at: OffsetDateTime,
    ) -> Result<Notification, Error> {
        let notification: Notification = sqlx::query_as(
            r#"
            INSERT INTO notifications (user_id, title, body, event_type, event, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(title)
        .bind(body)
        .bind(event_type)
        .bind(event)
        .bind(created_at)
        .fetch_one(self.storage.get_pool())
        .await?;

        Ok(notification)
    }

    /// Newest records first, bounded for display.
    pub async fn find_recent(&self, user_id: &str, limit: i64) -> Result<Vec<Notification>, Error> {
        let notifications: Vec<Notification> = sqlx::query_as(
            r#"
            SELECT * FROM notifications
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(self.storage.get_pool())
        .await?;

        Ok(notifications)
    }
}
