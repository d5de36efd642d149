//! Service wiring and the product filter pipeline.

use std::sync::Arc;

use prodfilter_infra::{CatalogSource, CatalogSourceError, HttpCatalogSource};
use prodfilter_products::{
    filter_products, highlight_products, FilterCriteria, FilterInfo, FilteredResponse, Product,
};

use crate::config::AppConfig;

/// Long-lived services shared by all handlers.
///
/// Holds the catalog source (and through it the pooled HTTP client); built
/// once at startup and shared behind an `Arc`.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<dyn CatalogSource>,
}

impl AppServices {
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Self {
        Self { catalog }
    }

    /// Wire the HTTP catalog source described by `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self, CatalogSourceError> {
        let source = HttpCatalogSource::new(config.catalog_url.clone(), config.catalog_timeout)?;
        Ok(Self::new(Arc::new(source)))
    }

    pub fn catalog_location(&self) -> &str {
        self.catalog.location()
    }

    /// Run one product filter query: fetch, describe the full catalog, filter,
    /// then highlight the survivors.
    ///
    /// Only the fetch can fail; every later step is pure.
    pub async fn product_filter(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<FilteredResponse, CatalogSourceError> {
        let catalog = self.catalog.fetch().await?.into_products();

        // Bounds and common words always describe the unfiltered catalog.
        let filter = FilterInfo::from_catalog(&catalog);

        let matched: Vec<&Product> = if criteria.is_unfiltered() {
            catalog.iter().collect()
        } else {
            filter_products(&catalog, criteria)
        };
        tracing::info!(count = matched.len(), "filtered products");

        let products = if criteria.wants_highlight() {
            highlight_products(matched, criteria.highlight_terms.as_slice())
        } else {
            matched.into_iter().cloned().collect()
        };

        Ok(FilteredResponse { products, filter })
    }
}
