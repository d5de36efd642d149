//! Response envelope of a product filter query.

use serde::{Deserialize, Serialize};

use prodfilter_core::Price;

use crate::frequency::common_words;
use crate::product::Product;

/// Metadata describing the whole catalog, independent of the applied filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterInfo {
    /// Lowest price in the catalog; `None` for an empty catalog.
    pub min_price: Option<Price>,
    /// Highest price in the catalog; `None` for an empty catalog.
    pub max_price: Option<Price>,
    pub common_words: Vec<String>,
}

impl FilterInfo {
    /// Compute price bounds and the common-words digest over the full catalog.
    pub fn from_catalog(products: &[Product]) -> Self {
        Self {
            min_price: products.iter().map(|p| p.price).min(),
            max_price: products.iter().map(|p| p.price).max(),
            common_words: common_words(products.iter().filter_map(|p| p.description.as_deref())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredResponse {
    pub products: Vec<Product>,
    pub filter: FilterInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_the_whole_catalog() {
        let products = vec![
            Product::new("50".parse().unwrap()).with_description("blue shirt"),
            Product::new("10".parse().unwrap()).with_description("red shirt"),
            Product::new("30".parse().unwrap()),
        ];
        let info = FilterInfo::from_catalog(&products);
        assert_eq!(info.min_price, Some("10".parse().unwrap()));
        assert_eq!(info.max_price, Some("50".parse().unwrap()));
        assert!(info.common_words.is_empty());
    }

    #[test]
    fn empty_catalog_has_no_bounds() {
        let info = FilterInfo::from_catalog(&[]);
        assert_eq!(info, FilterInfo::default());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let response = FilteredResponse {
            products: vec![Product::new("12.5".parse().unwrap()).with_title("t")],
            filter: FilterInfo {
                min_price: Some("10".parse().unwrap()),
                max_price: None,
                common_words: vec!["green".to_string()],
            },
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "products": [{"title": "t", "price": 12.5, "sizes": [], "description": null}],
                "filter": {"minPrice": 10, "maxPrice": null, "commonWords": ["green"]}
            })
        );
    }
}
