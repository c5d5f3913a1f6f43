use crate::error::Result;
use crate::routing::{EndpointDescriptor, RouteTable};
use axum::{
    Json,
    http::{Method, StatusCode},
    routing::get,
};
use serde_json::{Value, json};

pub const ROUTE_NAME: &str = "HealthCheck";
pub const ROUTE_PATH: &str = "/health";

pub fn descriptor() -> EndpointDescriptor {
    EndpointDescriptor::new(ROUTE_NAME, Method::GET, ROUTE_PATH)
        .with_tag("Diagnostics")
        .produces(StatusCode::OK)
}

pub fn map_health_check(table: RouteTable) -> Result<RouteTable> {
    table.register(descriptor(), get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
