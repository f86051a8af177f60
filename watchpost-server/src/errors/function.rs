use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum FunctionError {
    #[error("Function config not found")]
    NotFound,
}

impl FunctionError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            FunctionError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}
