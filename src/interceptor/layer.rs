use crate::exception::ExceptionFilter;
use crate::exception::http::HttpExceptionFilter;
use crate::interceptor::{ChainFuture, Interceptor, Next};
use axum::{body::Body, http::Request, response::Response};
use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service, ServiceExt};

/// Tower Layer running a chain of Interceptors around every route
///
/// The first interceptor in the list is the outermost one. An error
/// escaping the chain is turned into a response by `HttpExceptionFilter`.
#[derive(Clone)]
pub struct InterceptorLayer {
    interceptors: Arc<Vec<Box<dyn Interceptor>>>,
}

impl InterceptorLayer {
    pub fn new(interceptors: Vec<Box<dyn Interceptor>>) -> Self {
        Self {
            interceptors: Arc::new(interceptors),
        }
    }

    pub fn single(interceptor: impl Interceptor) -> Self {
        Self::new(vec![Box::new(interceptor)])
    }
}

impl<S> Layer<S> for InterceptorLayer {
    type Service = InterceptorMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        InterceptorMiddleware {
            inner,
            interceptors: Arc::clone(&self.interceptors),
        }
    }
}

#[derive(Clone)]
pub struct InterceptorMiddleware<S> {
    inner: S,
    interceptors: Arc<Vec<Box<dyn Interceptor>>>,
}

impl<S> Service<Request<Body>> for InterceptorMiddleware<S>
where
    S: Service<Request<Body>, Response = Response, Error = Infallible> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Infallible>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let interceptors = Arc::clone(&self.interceptors);
        // Keep the instance that was polled ready, leave a fresh clone behind.
        let clone = self.inner.clone();
        let inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            let mut chain = Next::new(move |req: Request<Body>| -> ChainFuture {
                Box::pin(async move {
                    match inner.oneshot(req).await {
                        Ok(response) => Ok(response),
                        Err(never) => match never {},
                    }
                })
            });

            for index in (0..interceptors.len()).rev() {
                let interceptors = Arc::clone(&interceptors);
                let next = chain;
                chain = Next::new(move |req: Request<Body>| -> ChainFuture {
                    Box::pin(async move { interceptors[index].intercept(req, next).await })
                });
            }

            match chain.run(request).await {
                Ok(response) => Ok(response),
                Err(error) => Ok(HttpExceptionFilter.catch(error)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interceptor::InterceptorResult;
    use async_trait::async_trait;
    use axum::{Router, http::StatusCode, routing::get};
    use std::sync::Mutex;

    struct Recording {
        label: &'static str,
        seen: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Interceptor for Recording {
        async fn intercept(&self, request: Request<Body>, next: Next) -> InterceptorResult {
            self.seen.lock().unwrap().push(format!("{}:before", self.label));
            let response = next.run(request).await?;
            self.seen.lock().unwrap().push(format!("{}:after", self.label));
            Ok(response)
        }
    }

    struct Failing;

    #[async_trait]
    impl Interceptor for Failing {
        async fn intercept(&self, _request: Request<Body>, _next: Next) -> InterceptorResult {
            Err("interceptor refused the request".into())
        }
    }

    fn request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_chain_runs_in_declaration_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let layer = InterceptorLayer::new(vec![
            Box::new(Recording {
                label: "outer",
                seen: Arc::clone(&seen),
            }),
            Box::new(Recording {
                label: "inner",
                seen: Arc::clone(&seen),
            }),
        ]);
        let app = Router::new().route("/ping", get(|| async { "pong" })).layer(layer);

        let response = app.oneshot(request("/ping")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            *seen.lock().unwrap(),
            vec!["outer:before", "inner:before", "inner:after", "outer:after"]
        );
    }

    #[tokio::test]
    async fn test_interceptor_error_becomes_server_error() {
        let app = Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(InterceptorLayer::single(Failing));

        let response = app.oneshot(request("/ping")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
