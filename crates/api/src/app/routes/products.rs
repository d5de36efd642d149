use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/ProductFilter", get(product_filter))
}

/// `GET /products/ProductFilter?minPrice=&maxPrice=&size=&highlight=`
pub async fn product_filter(
    Extension(services): Extension<Arc<AppServices>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> axum::response::Response {
    let query = dto::ProductFilterQuery::from_pairs(pairs);
    tracing::info!(
        min_price = ?query.min_price,
        max_price = ?query.max_price,
        size = ?query.size,
        highlight = ?query.highlight,
        "product filter requested"
    );

    match services.product_filter(&query.to_criteria()).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            tracing::error!(catalog = services.catalog_location(), error = %e, "catalog fetch failed");
            errors::catalog_error_to_response(e)
        }
    }
}
