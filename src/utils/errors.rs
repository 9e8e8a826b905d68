use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::HashMap;

use crate::store::StoreError;
use crate::utils::logger::LOGGER;

/// Wire shape for every failing handler path: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub enum AppError {
    Validation(String),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .next()
            .map(|(field, field_errors)| {
                let detail = field_errors
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "is invalid".to_string());
                format!("{} {}", field, detail)
            })
            .unwrap_or_else(|| "Validation failed".to_string());

        AppError::Validation(message)
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        let mut context = HashMap::new();
        context.insert(
            "error_type".to_string(),
            serde_json::Value::String("store".to_string()),
        );
        LOGGER.log_error(&error.to_string(), context);

        AppError::Internal("Database error occurred".to_string())
    }
}
