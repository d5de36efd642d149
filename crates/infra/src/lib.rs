//! Infrastructure layer: upstream catalog retrieval.

pub mod catalog_source;

pub use catalog_source::{CatalogSource, CatalogSourceError, HttpCatalogSource, StaticCatalogSource};
