use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use watchpost_api::restful::NotificationResponse;

use super::Table;

/// Immutable history record, appended only by the fan-out service.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Notification {
    pub id: i64,
    pub user_id: String,
    pub title: String,
    pub body: String,
    pub event_type: String,
    pub event: Option<String>,
    pub created_at: OffsetDateTime,
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id,
            title: notification.title,
            body: notification.body,
            event_type: notification.event_type.into(),
            event: notification.event.map(Into::into),
            created_at: notification.created_at,
        }
    }
}

#[derive(Clone)]
pub struct NotificationTable;

impl Table for NotificationTable {
    fn name(&self) -> &'static str {
        "notifications"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS notifications (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                title TEXT NOT NULL,
                body TEXT NOT NULL,
                event_type VARCHAR(16) NOT NULL,
                event VARCHAR(16),
                created_at TIMESTAMP NOT NULL,
                FOREIGN KEY (user_id) REFERENCES users (id) ON DELETE CASCADE
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS notifications;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["users"]
    }
}
