use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use feedback::payloads::ApiResult;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload")]
    MalformedPayload,

    #[error("{0}")]
    Validation(String),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("TLS error: {0}")]
    Tls(#[from] native_tls::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] tokio_postgres::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedPayload | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Tls(_) | AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Storage detail stays in the log; the caller gets a generic message.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("Database operation error: {self}");
            "Failed to submit feedback due to a server error.".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ApiResult::failure(message))).into_response()
    }
}
