//! Filter criteria built from raw request parameters.

use prodfilter_core::{DomainError, Price};

/// Optional criteria for one request. Every field is independent; an empty
/// `FilterCriteria` matches every product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Inclusive lower bound.
    pub min_price: Option<Price>,
    /// Inclusive upper bound.
    pub max_price: Option<Price>,
    /// The requested lower bound lies above every representable price, so
    /// nothing can match.
    pub min_price_beyond_range: bool,
    /// A product must carry every one of these sizes.
    pub size_tokens: Vec<String>,
    /// Terms to highlight, applied in this order.
    pub highlight_terms: Vec<String>,
}

impl FilterCriteria {
    /// Build criteria from the raw query strings.
    ///
    /// Unparseable prices are treated as absent. Bounds finer than a `Price`
    /// round inward (min up, max down); a max too large to represent saturates
    /// and a min too large to represent matches nothing. List parameters are
    /// split on `,`, trimmed, and empty entries dropped.
    pub fn from_raw(
        min_price: Option<&str>,
        max_price: Option<&str>,
        size: Option<&str>,
        highlight: Option<&str>,
    ) -> Self {
        let mut criteria = Self {
            max_price: max_price.and_then(parse_max_bound),
            size_tokens: size.map(split_list).unwrap_or_default(),
            highlight_terms: highlight.map(split_list).unwrap_or_default(),
            ..Self::default()
        };
        if let Some(raw) = min_price {
            match Price::parse_ceil(raw) {
                Ok(price) => criteria.min_price = Some(price),
                Err(DomainError::PriceOutOfRange(_)) => criteria.min_price_beyond_range = true,
                Err(DomainError::InvalidPrice(_)) => {}
            }
        }
        criteria
    }

    pub fn with_min_price(mut self, price: Price) -> Self {
        self.min_price = Some(price);
        self
    }

    pub fn with_max_price(mut self, price: Price) -> Self {
        self.max_price = Some(price);
        self
    }

    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.size_tokens = sizes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_highlights<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.highlight_terms = terms.into_iter().map(Into::into).collect();
        self
    }

    /// No predicate is active.
    pub fn is_unfiltered(&self) -> bool {
        self.min_price.is_none()
            && !self.min_price_beyond_range
            && self.max_price.is_none()
            && self.size_tokens.is_empty()
    }

    pub fn wants_highlight(&self) -> bool {
        !self.highlight_terms.is_empty()
    }
}

fn parse_max_bound(raw: &str) -> Option<Price> {
    match Price::parse_floor(raw) {
        Ok(price) => Some(price),
        Err(DomainError::PriceOutOfRange(_)) => Some(Price::MAX),
        Err(DomainError::InvalidPrice(_)) => None,
    }
}

/// Split a comma-separated parameter into trimmed, non-empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
