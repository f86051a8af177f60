use std::sync::Arc;

use sqlx::Error;
use time::OffsetDateTime;

use crate::configs::Storage;
use crate::models::User;

pub struct UserRepository {
    storage: Arc<Storage>,
}

impl UserRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    /// Create the user row if it does not exist yet. Users come into being
    /// implicitly, on the first device heartbeat or event that mentions
    /// them.
    pub async fn ensure(&self, user_id: &str) -> Result<(), Error> {
        sqlx::query("INSERT INTO users (id) VALUES ($1) ON CONFLICT (id) DO NOTHING")
            .bind(user_id)
            .execute(self.storage.get_pool())
            .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, Error> {
        let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(self.storage.get_pool())
            .await?;

        Ok(user)
    }

    /// Merge-set the mail flag and its timestamp; all other status fields
    /// are preserved.
    pub async fn mark_mail_detected(
        &self,
        user_id: &str,
        at: OffsetDateTime,
    ) -> Result<(), Error> {
        sqlx::query(
            r#"
            INSERT INTO users (id, mail_detected, mail_updated_at)
            VALUES ($1, TRUE, $2)
            ON CONFLICT (id) DO UPDATE SET
                mail_detected = TRUE,
                mail_updated_at = $2
            "#,
        )
        .bind(user_id)
        .bind(at)
        .execute(self.storage.get_pool())
        .await?;

        Ok(())
    }

    /// Merge-set the dryer phase fields; all other status fields are
    /// preserved.
    pub async fn set_dryer_state(
        &self,
        user_id: &str,
        running: bool,
        event: Option<&str>,
        at: OffsetDateTime,
    ) -> Result<(), Error> {
        sqlx::query(
            r#"
            INSERT INTO users (id, dryer_running, dryer_last_event, dryer_updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                dryer_running = $2,
                dryer_last_event = $3,
                dryer_updated_at = $4
            "#,
        )
        .bind(user_id)
        .bind(running)
        .bind(event)
        .bind(at)
        .execute(self.storage.get_pool())
        .await?;

        Ok(())
    }
}
