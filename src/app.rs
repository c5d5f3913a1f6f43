//! Application assembly
//!
//! Builds every slice with its dependencies passed in explicitly and
//! composes them into one router.

use crate::error::Result;
use crate::features::categories::get_category_by_id::{self, GetCategoryByIdHandler};
use crate::features::health;
use crate::interceptor::{InterceptorLayer, LoggingInterceptor};
use crate::routing::RouteTable;
use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Register all slices into a route table.
pub fn build_route_table(db: Arc<DatabaseConnection>) -> Result<RouteTable> {
    let get_category_by_id_handler = Arc::new(GetCategoryByIdHandler::new(db));

    let table = RouteTable::new();
    let table = health::map_health_check(table)?;
    let table = get_category_by_id::map_get_category_by_id(table, get_category_by_id_handler)?;

    tracing::info!(endpoints = table.endpoints().len(), "Route table built");
    Ok(table)
}

/// Build the HTTP application with request logging applied to every route.
pub fn build_app(db: Arc<DatabaseConnection>) -> Result<Router> {
    let router = build_route_table(db)?
        .into_router()
        .layer(InterceptorLayer::single(LoggingInterceptor));
    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Method, StatusCode};
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[test]
    fn test_route_table_describes_every_slice() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let table = build_route_table(Arc::new(db)).unwrap();

        let endpoint = table.find(get_category_by_id::ROUTE_NAME).unwrap();
        assert_eq!(endpoint.method, Method::GET);
        assert_eq!(endpoint.path, "/api/categorias/{id}");
        assert_eq!(endpoint.tags, vec!["Categorias"]);
        assert_eq!(endpoint.produces, vec![StatusCode::OK, StatusCode::NOT_FOUND]);

        assert!(table.find(health::ROUTE_NAME).is_some());
        assert_eq!(table.endpoints().len(), 2);
    }
}
