use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// No user with the requested id
    NotFound(i64),
    Database(String),
    BadRequest(String),
    Configuration(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(id) => write!(f, "User not found: {}", id),
            AppError::Database(e) => write!(f, "Database error: {}", e),
            AppError::BadRequest(e) => write!(f, "Bad request: {}", e),
            AppError::Configuration(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Body text for 500 responses; the underlying cause is only logged
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

// HTTP response conversion
impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Configuration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn to_response(&self) -> (StatusCode, Json<serde_json::Value>) {
        let status = self.status_code();
        let body = match self {
            // The not-found body is the requested id itself
            AppError::NotFound(id) => json!(id),
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                json!({ "error": INTERNAL_ERROR_MESSAGE })
            }
            AppError::Configuration(e) => {
                tracing::error!("Configuration error: {}", e);
                json!({ "error": INTERNAL_ERROR_MESSAGE })
            }
            AppError::BadRequest(e) => json!({ "error": e }),
        };

        (status, Json(body))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_response().into_response()
    }
}
