//! Catalog records as served by the upstream catalog.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use prodfilter_core::Price;

/// A catalog entry as served by the upstream catalog.
///
/// Every field is best-effort: a missing `price` reads as zero, missing or
/// `null` `sizes` read as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Price,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Product {
    pub fn new(price: Price) -> Self {
        Self {
            price,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Exact, case-sensitive size membership.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }
}

/// Credentials block the upstream document carries alongside the products.
///
/// Not used by the pipeline; kept so the document deserializes faithfully.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKey {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub secondary: Option<String>,
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("ApiKey")
            .field("primary", &redact(&self.primary))
            .field("secondary", &redact(&self.secondary))
            .finish()
    }
}

/// Top-level upstream payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub products: Vec<Product>,
    #[serde(default, rename = "APIkey", alias = "APIKey", alias = "apiKey")]
    pub api_key: Option<ApiKey>,
}

impl CatalogDocument {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            api_key: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
