use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use watchpost_api::restful::FunctionConfigResponse;

use super::Table;

/// User-customized strings and tuning for one sensor function, read back
/// the next time its setup screen opens.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FunctionConfig {
    pub user_id: String,
    pub name: String,
    pub use_case_name: String,
    pub notification_title: String,
    pub notification_body: String,
    pub threshold: Option<f64>,
    pub updated_at: OffsetDateTime,
}

impl From<FunctionConfig> for FunctionConfigResponse {
    fn from(config: FunctionConfig) -> Self {
        Self {
            name: config.name,
            use_case_name: config.use_case_name,
            notification_title: config.notification_title,
            notification_body: config.notification_body,
            threshold: config.threshold,
            updated_at: config.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct FunctionConfigTable;

impl Table for FunctionConfigTable {
    fn name(&self) -> &'static str {
        "function_configs"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS function_configs (
                user_id TEXT NOT NULL,
                name TEXT NOT NULL,
                use_case_name TEXT NOT NULL,
                notification_title TEXT NOT NULL,
                notification_body TEXT NOT NULL,
                threshold REAL,
                updated_at TIMESTAMP NOT NULL,
                PRIMARY KEY (user_id, name),
                FOREIGN KEY (user_id) REFERENCES users (id) ON DELETE CASCADE
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS function_configs;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["users"]
    }
}
