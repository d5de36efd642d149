use std::sync::atomic::{AtomicUsize, Ordering};

use prodfilter_products::{CatalogDocument, Product};

use super::r#trait::{CatalogSource, CatalogSourceError};

/// Catalog source returning a fixed outcome on every call.
///
/// Intended for tests/dev. Counts fetches so callers can assert that nothing
/// is cached.
#[derive(Debug)]
pub struct StaticCatalogSource {
    outcome: Result<CatalogDocument, CatalogSourceError>,
    fetches: AtomicUsize,
}

impl StaticCatalogSource {
    pub fn new(document: CatalogDocument) -> Self {
        Self {
            outcome: Ok(document),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn from_products(products: Vec<Product>) -> Self {
        Self::new(CatalogDocument::new(products))
    }

    /// A source whose every fetch fails with `error`.
    pub fn failing(error: CatalogSourceError) -> Self {
        Self {
            outcome: Err(error),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch(&self) -> Result<CatalogDocument, CatalogSourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }

    fn location(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn returns_fixed_document_and_counts_fetches() {
        let source = StaticCatalogSource::from_products(vec![Product::default()]);
        assert_eq!(source.fetch().await.unwrap().products.len(), 1);
        assert_eq!(source.fetch().await.unwrap().products.len(), 1);
        assert_eq!(source.fetch_count(), 2);
    }

    #[tokio::test]
    async fn failing_source_fails_every_time() {
        let source: Arc<dyn CatalogSource> = Arc::new(StaticCatalogSource::failing(
            CatalogSourceError::Retrieval("down".to_string()),
        ));
        assert_eq!(
            source.fetch().await.unwrap_err(),
            CatalogSourceError::Retrieval("down".to_string())
        );
        assert_eq!(source.location(), "static");
    }
}
