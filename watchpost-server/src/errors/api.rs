use crate::services::PushError;

use super::{DeviceError, FunctionError, NotifyError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Notify error: {0}")]
    Notify(#[from] NotifyError),

    #[error("Device error: {0}")]
    Device(#[from] DeviceError),

    #[error("Function error: {0}")]
    Function(#[from] FunctionError),

    #[error("Push error: {0}")]
    Push(#[from] PushError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
