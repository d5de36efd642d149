//! Catalog source boundary.
//!
//! This module defines the infrastructure-facing abstraction for retrieving the
//! upstream product catalog, plus an HTTP implementation and a static one for
//! tests.

pub mod http;
pub mod in_memory;
pub mod r#trait;

pub use http::HttpCatalogSource;
pub use in_memory::StaticCatalogSource;
pub use r#trait::{parse_catalog, CatalogSource, CatalogSourceError};
