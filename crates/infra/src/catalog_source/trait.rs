use std::sync::Arc;

use thiserror::Error;

use prodfilter_products::CatalogDocument;

/// Catalog retrieval error.
///
/// These are **infrastructure errors** (transport, upstream payload shape).
/// None of them is retried by the source; the caller decides what to do.
///
/// An empty catalog is not an error: sources return an empty document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogSourceError {
    /// The upstream could not be reached or answered with a non-success status.
    #[error("catalog retrieval failed: {0}")]
    Retrieval(String),

    /// The upstream did not answer within the configured timeout.
    #[error("catalog retrieval timed out: {0}")]
    Timeout(String),

    /// The upstream body was not a catalog document.
    #[error("catalog deserialization failed: {0}")]
    Deserialization(String),
}

/// Source of the product catalog.
///
/// Every call to `fetch()` performs a fresh retrieval; implementations keep no
/// cache. Implementations must be safe to share across concurrent requests.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Retrieve and decode the catalog document.
    async fn fetch(&self) -> Result<CatalogDocument, CatalogSourceError>;

    /// Human-readable location of the catalog, for logs.
    fn location(&self) -> &str;
}

#[async_trait::async_trait]
impl<S> CatalogSource for Arc<S>
where
    S: CatalogSource + ?Sized,
{
    async fn fetch(&self) -> Result<CatalogDocument, CatalogSourceError> {
        (**self).fetch().await
    }

    fn location(&self) -> &str {
        (**self).location()
    }
}

/// Decode an upstream body. A JSON `null` body reads as an empty catalog.
pub fn parse_catalog(body: &[u8]) -> Result<CatalogDocument, CatalogSourceError> {
    serde_json::from_slice::<Option<CatalogDocument>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| CatalogSourceError::Deserialization(e.to_string()))
}
