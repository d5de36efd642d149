//! Predicate filter over an in-memory catalog.

use crate::criteria::FilterCriteria;
use crate::product::Product;

impl FilterCriteria {
    /// Check one product against the criteria.
    ///
    /// Stages run in a fixed order (min price, max price, sizes) and stop at
    /// the first failing stage.
    pub fn matches(&self, product: &Product) -> bool {
        if self.min_price_beyond_range {
            return false;
        }
        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        self.size_tokens.iter().all(|size| product.has_size(size))
    }
}

/// Select the products matching `criteria`, preserving catalog order.
///
/// The catalog is borrowed, never modified.
pub fn filter_products<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    products.iter().filter(|p| criteria.matches(p)).collect()
}
