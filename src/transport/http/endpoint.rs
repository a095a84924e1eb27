//! Binding of endpoints (request -> resource) onto axum routes.

use crate::domain::resource::Resource;
use crate::transport::http::dispatcher;
use crate::transport::http::translator;
use axum::body::Bytes;
use axum::extract::Request;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{any, MethodRouter};
use std::sync::Arc;

/// Resolves the resource a request addresses.
///
/// Called once per request. Returning `None` answers 404 whatever the method.
pub trait Endpoint: Send + Sync + 'static {
    fn resource(&self, request: &Parts) -> Option<Box<dyn Resource>>;
}

/// Runs one request through resolve -> dispatch -> execute -> respond.
pub async fn serve(endpoint: &dyn Endpoint, request: Request, max_body_bytes: usize) -> Response {
    let (parts, body) = request.into_parts();

    let Some(mut resource) = endpoint.resource(&parts) else {
        tracing::debug!(method = %parts.method, path = %parts.uri.path(), "no resource");
        return translator::empty(StatusCode::NOT_FOUND);
    };

    let outcome = {
        let Some(operation) = dispatcher::select(resource.as_mut(), &parts.method) else {
            tracing::debug!(method = %parts.method, path = %parts.uri.path(), "method not supported by resource");
            return translator::empty(StatusCode::METHOD_NOT_ALLOWED);
        };
        tracing::debug!(
            capability = %operation.capability(),
            path = %parts.uri.path(),
            "dispatching"
        );

        let body = if operation.needs_body() {
            match axum::body::to_bytes(body, max_body_bytes).await {
                Ok(bytes) => bytes,
                Err(err) => {
                    tracing::debug!(error = %err, "failed to read request body");
                    return translator::empty(StatusCode::BAD_REQUEST);
                }
            }
        } else {
            Bytes::new()
        };

        operation.run(&body)
    };

    translator::respond(resource.as_ref(), outcome)
}

/// An axum method router that sends every method, OPTIONS and unknown ones included, through
/// `endpoint`.
pub fn endpoint_route<S>(endpoint: impl Endpoint, max_body_bytes: usize) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    let endpoint: Arc<dyn Endpoint> = Arc::new(endpoint);
    any(move |request: Request| {
        let endpoint = Arc::clone(&endpoint);
        async move { serve(endpoint.as_ref(), request, max_body_bytes).await }
    })
}
