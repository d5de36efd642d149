//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: catalog source wiring and the product filter pipeline
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: raw query parameters and their mapping to domain criteria
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{http::Request, Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::{self, RequestId};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: AppServices) -> Router {
    let services = Arc::new(services);

    routes::router().layer(Extension(services)).layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(middleware::request_id_middleware))
            .layer(TraceLayer::new_for_http().make_span_with(
                |req: &Request<axum::body::Body>| {
                    let request_id = req
                        .extensions()
                        .get::<RequestId>()
                        .map(RequestId::as_str)
                        .unwrap_or("-");
                    tracing::info_span!(
                        "http_request",
                        method = %req.method(),
                        uri = %req.uri(),
                        request_id = %request_id,
                    )
                },
            )),
    )
}
