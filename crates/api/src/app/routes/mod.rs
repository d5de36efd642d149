use axum::{routing::get, Router};

pub mod products;
pub mod system;

/// Router for the catalog query endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/products", products::router())
}
