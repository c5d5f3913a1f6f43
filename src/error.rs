use crate::exception::ExceptionFilter;
use crate::exception::http::HttpExceptionFilter;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SliceError>;

#[derive(Debug, Error)]
pub enum SliceError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Duplicate route: {name}")]
    DuplicateRoute { name: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SliceError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl axum::response::IntoResponse for SliceError {
    fn into_response(self) -> axum::response::Response {
        HttpExceptionFilter.catch(Box::new(self))
    }
}
