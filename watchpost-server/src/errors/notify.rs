use axum::http::StatusCode;

/// Client input errors for `/sendNotification`, rejected before any side
/// effect.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Content-Type must be application/json")]
    UnsupportedContentType,

    #[error("Malformed request body: {0}")]
    InvalidJson(String),

    #[error("Missing userId")]
    MissingUserId,
}

impl NotifyError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            NotifyError::UnsupportedContentType => StatusCode::BAD_REQUEST,
            NotifyError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            NotifyError::MissingUserId => StatusCode::BAD_REQUEST,
        }
    }
}
