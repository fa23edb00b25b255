use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::MessageBody;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Error surfaced by item handlers, always rendered as `{"message": ...}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    /// Map a service error; absent ids use `not_found_status` so the legacy
    /// 200 response can be kept.
    pub fn from_service(err: ServiceError, not_found_status: StatusCode) -> Self {
        match err {
            ServiceError::NotFound(_) => Self::new(not_found_status, MessageBody::ITEM_NOT_FOUND),
            ServiceError::Storage(_) => {
                error!(err = %err, code = err.code(), "item store failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(MessageBody::new(self.message))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
