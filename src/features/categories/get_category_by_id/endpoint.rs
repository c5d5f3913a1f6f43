use super::handler::GetCategoryByIdHandler;
use crate::common::Lookup;
use crate::error::Result;
use crate::pipe::{Pipe, builtins::ParseIntPipe};
use crate::routing::{EndpointDescriptor, RouteTable};
use axum::{
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use std::sync::Arc;

pub const ROUTE_NAME: &str = "ObterCategoriaPorId";
pub const ROUTE_PATH: &str = "/api/categorias/{id}";

pub fn descriptor() -> EndpointDescriptor {
    EndpointDescriptor::new(ROUTE_NAME, Method::GET, ROUTE_PATH)
        .with_tag("Categorias")
        .produces(StatusCode::OK)
        .produces(StatusCode::NOT_FOUND)
}

/// Register `GET /api/categorias/{id}` served by `handler`.
pub fn map_get_category_by_id(
    table: RouteTable,
    handler: Arc<GetCategoryByIdHandler>,
) -> Result<RouteTable> {
    table.register(descriptor(), get(get_category_by_id).with_state(handler))
}

async fn get_category_by_id(
    State(handler): State<Arc<GetCategoryByIdHandler>>,
    Path(segment): Path<String>,
) -> Result<Response> {
    // Only integer ids match this route.
    let id = match ParseIntPipe.transform(segment).await {
        Ok(id) => id,
        Err(e) => {
            tracing::debug!(error = %e, "Path segment does not match the integer id constraint");
            return Ok(StatusCode::NOT_FOUND.into_response());
        }
    };

    let category = handler.execute(id).await?;
    Ok(Lookup(category).into_response())
}
