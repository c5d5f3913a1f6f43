//! # categorias-api
//!
//! A vertical-slice HTTP service exposing category lookups over a
//! relational store.
//!
//! ## Endpoints
//!
//! - `GET /api/categorias/{id}`: `200` with `{"id","nome","descricao"}` when
//!   the category exists, `404` with an empty body otherwise
//! - `GET /health`: liveness probe
//!
//! ## Layout
//!
//! - **Feature slices** (`features`): each slice owns its route registration,
//!   handler and response shape
//! - **Route table** (`routing`): explicit dispatch table with endpoint
//!   metadata
//! - **Persistence** (`persistence`): sea-orm connection, schema bootstrap and
//!   entities
//! - **Interceptors** (`interceptor`): request logging around every route
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use categorias_api::{app, config::AppConfig, lifecycle::shutdown_signal, persistence};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::from_env()?;
//!     let db = Arc::new(persistence::connect(&config.database).await?);
//!     persistence::ensure_schema(&db).await?;
//!
//!     let router = app::build_app(db)?;
//!     let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//!     axum::serve(listener, router)
//!         .with_graceful_shutdown(shutdown_signal())
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod common;
pub mod config;
pub mod error;
pub mod exception;
pub mod features;
pub mod interceptor;
pub mod lifecycle;
pub mod persistence;
pub mod pipe;
pub mod routing;

pub use common::Lookup;
pub use error::{Result, SliceError};
pub use features::categories::get_category_by_id::{CategoryResponse, GetCategoryByIdHandler};
pub use routing::{EndpointDescriptor, RouteTable};

/// Prelude module for convenient imports
///
/// ```
/// use categorias_api::prelude::*;
/// ```
pub mod prelude {
    pub use crate::app::{build_app, build_route_table};
    pub use crate::common::{Lookup, respond};
    pub use crate::config::{AppConfig, ConfigService, DatabaseConfig};
    pub use crate::error::{Result, SliceError};
    pub use crate::exception::{ExceptionFilter, http::HttpExceptionFilter};
    pub use crate::interceptor::{
        Interceptor, InterceptorLayer, InterceptorResult, LoggingInterceptor, Next,
    };
    pub use crate::lifecycle::shutdown_signal;
    pub use crate::pipe::builtins::*;
    pub use crate::pipe::{Pipe, PipeError, PipeResult};
    pub use crate::routing::{EndpointDescriptor, RouteTable};
    pub use async_trait::async_trait;
    pub use axum::{
        Json, Router,
        extract::{Path, State},
        http::StatusCode,
        response::{IntoResponse, Response},
    };
    pub use std::sync::Arc;
}
