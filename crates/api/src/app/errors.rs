use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use prodfilter_infra::CatalogSourceError;

/// Map an upstream catalog failure to a gateway error response.
pub fn catalog_error_to_response(err: CatalogSourceError) -> axum::response::Response {
    match err {
        CatalogSourceError::Retrieval(msg) => {
            json_error(StatusCode::BAD_GATEWAY, "catalog_unavailable", msg)
        }
        CatalogSourceError::Timeout(msg) => {
            json_error(StatusCode::GATEWAY_TIMEOUT, "catalog_timeout", msg)
        }
        CatalogSourceError::Deserialization(msg) => {
            json_error(StatusCode::BAD_GATEWAY, "catalog_malformed", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
