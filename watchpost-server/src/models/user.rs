use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use watchpost_api::restful::UserStatusResponse;

use super::Table;

/// Per-user status bag. Created implicitly the first time anything refers
/// to the user; never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub mail_detected: bool,
    pub mail_updated_at: Option<OffsetDateTime>,
    pub dryer_running: bool,
    pub dryer_last_event: Option<String>,
    pub dryer_updated_at: Option<OffsetDateTime>,
}

impl From<User> for UserStatusResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            mail_detected: user.mail_detected,
            mail_last_updated_at: user.mail_updated_at,
            dryer_running: user.dryer_running,
            dryer_last_event: user.dryer_last_event.map(Into::into),
            dryer_last_updated_at: user.dryer_updated_at,
        }
    }
}

#[derive(Clone)]
pub struct UserTable;

impl Table for UserTable {
    fn name(&self) -> &'static str {
        "users"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                mail_detected BOOLEAN NOT NULL DEFAULT FALSE,
                mail_updated_at TIMESTAMP,
                dryer_running BOOLEAN NOT NULL DEFAULT FALSE,
                dryer_last_event VARCHAR(16),
                dryer_updated_at TIMESTAMP
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS users;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }
}
