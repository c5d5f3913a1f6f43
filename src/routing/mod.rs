//! Route table
//!
//! An explicit dispatch table: every endpoint is registered with a
//! descriptor (name, method, path pattern, tags, declared statuses) next to
//! the axum `MethodRouter` serving it. Handlers arrive with their state
//! already bound, so the table itself is stateless.

use crate::error::{Result, SliceError};
use axum::{
    Router,
    http::{Method, StatusCode},
    routing::MethodRouter,
};

/// Metadata describing one registered endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDescriptor {
    pub name: &'static str,
    pub method: Method,
    pub path: &'static str,
    pub tags: Vec<&'static str>,
    pub produces: Vec<StatusCode>,
}

impl EndpointDescriptor {
    pub fn new(name: &'static str, method: Method, path: &'static str) -> Self {
        Self {
            name,
            method,
            path,
            tags: Vec::new(),
            produces: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: &'static str) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn produces(mut self, status: StatusCode) -> Self {
        self.produces.push(status);
        self
    }
}

/// Endpoints and the router serving them
#[derive(Default)]
pub struct RouteTable {
    endpoints: Vec<EndpointDescriptor>,
    router: Router,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an endpoint
    ///
    /// Fails when the name is already taken or when the same method and path
    /// pair is already served by another endpoint.
    pub fn register(mut self, descriptor: EndpointDescriptor, route: MethodRouter) -> Result<Self> {
        if let Some(existing) = self.endpoints.iter().find(|e| {
            e.name == descriptor.name
                || (e.method == descriptor.method && e.path == descriptor.path)
        }) {
            return Err(SliceError::DuplicateRoute {
                name: format!(
                    "{} ({} {} already served by {})",
                    descriptor.name, descriptor.method, descriptor.path, existing.name
                ),
            });
        }

        tracing::info!(
            name = descriptor.name,
            method = %descriptor.method,
            path = descriptor.path,
            "Route registered"
        );

        self.router = self.router.route(descriptor.path, route);
        self.endpoints.push(descriptor);
        Ok(self)
    }

    pub fn endpoints(&self) -> &[EndpointDescriptor] {
        &self.endpoints
    }

    pub fn find(&self, name: &str) -> Option<&EndpointDescriptor> {
        self.endpoints.iter().find(|e| e.name == name)
    }

    pub fn into_router(self) -> Router {
        self.router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::{get, post};

    fn ping() -> EndpointDescriptor {
        EndpointDescriptor::new("Ping", Method::GET, "/ping")
            .with_tag("Diagnostics")
            .produces(StatusCode::OK)
    }

    #[test]
    fn test_register_and_find() {
        let table = RouteTable::new()
            .register(ping(), get(|| async { "pong" }))
            .unwrap();

        let endpoint = table.find("Ping").unwrap();
        assert_eq!(endpoint.path, "/ping");
        assert_eq!(endpoint.tags, vec!["Diagnostics"]);
        assert_eq!(endpoint.produces, vec![StatusCode::OK]);
        assert!(table.find("Pong").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let table = RouteTable::new()
            .register(ping(), get(|| async { "pong" }))
            .unwrap();
        let again = EndpointDescriptor::new("Ping", Method::POST, "/other");

        let result = table.register(again, post(|| async { "pong" }));
        assert!(matches!(result, Err(SliceError::DuplicateRoute { .. })));
    }

    #[test]
    fn test_duplicate_method_and_path_rejected() {
        let table = RouteTable::new()
            .register(ping(), get(|| async { "pong" }))
            .unwrap();
        let shadow = EndpointDescriptor::new("PingAgain", Method::GET, "/ping");

        let result = table.register(shadow, get(|| async { "pong" }));
        assert!(matches!(result, Err(SliceError::DuplicateRoute { name }) if name.contains("Ping")));
    }
}
