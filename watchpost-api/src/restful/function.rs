use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Body of `PUT /users/:user_id/functions/:name` — the user-customized
/// strings and tuning for one sensor function.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFunctionConfigRequest {
    pub use_case_name: String,
    pub notification_title: String,
    pub notification_body: String,
    /// Trigger threshold; the server clamps it into [0.1, 1.0].
    #[serde(default)]
    pub threshold: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionConfigResponse {
    pub name: String,
    pub use_case_name: String,
    pub notification_title: String,
    pub notification_body: String,
    pub threshold: Option<f64>,
    pub updated_at: OffsetDateTime,
}
