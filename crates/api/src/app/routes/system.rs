use axum::http::StatusCode;

/// Liveness probe; never touches the upstream catalog.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
