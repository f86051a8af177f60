pub mod api;
pub mod device;
pub mod function;
pub mod notify;

pub use api::ApiError;
pub use device::DeviceError;
pub use function::FunctionError;
pub use notify::NotifyError;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use watchpost_api::restful::ErrorResponse;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::Notify(e) => (e.status_code(), None, e.to_string()),
            ApiError::Device(e) => (e.status_code(), None, e.to_string()),
            ApiError::Function(e) => (e.status_code(), None, e.to_string()),
            ApiError::Push(e) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error_id = ?error_id, "Push gateway error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.code(), e.to_string())
            }
            ApiError::Database(e) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error_id = ?error_id, "Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, None, e.to_string())
            }
            ApiError::Internal(e) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error_id = ?error_id, "Internal error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, None, e.to_string())
            }
        };

        let body = Json(ErrorResponse { code, message });

        (status, body).into_response()
    }
}
