use crate::error::SliceError;
use crate::exception::ExceptionFilter;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::error::Error;

/// Default filter: every uncaught error becomes a 500 with a JSON envelope.
///
/// Database errors are logged in full but only a generic message is sent
/// to the client.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpExceptionFilter;

impl ExceptionFilter for HttpExceptionFilter {
    fn catch(&self, error: Box<dyn Error + Send + Sync>) -> Response {
        tracing::error!(error = %error, "Request failed with an unhandled error");

        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let message = match error.downcast_ref::<SliceError>() {
            Some(SliceError::Database(_)) => "Database operation failed".to_string(),
            Some(slice_error) => slice_error.to_string(),
            None => "Internal Server Error".to_string(),
        };

        (
            status,
            Json(json!({
                "statusCode": status.as_u16(),
                "message": message,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            })),
        )
            .into_response()
    }
}
