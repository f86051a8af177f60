use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("Battery must be between 0 and 100")]
    InvalidBattery,
}

impl DeviceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DeviceError::InvalidBattery => StatusCode::BAD_REQUEST,
        }
    }
}
