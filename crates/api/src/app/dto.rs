use prodfilter_products::FilterCriteria;

// -------------------------
// Request DTOs
// -------------------------

/// Raw query parameters of `GET /products/ProductFilter`.
///
/// Built from the decoded key/value pairs rather than a typed extractor so a
/// malformed or repeated parameter never rejects the request. Keys match
/// case-insensitively; repeated list parameters are joined, repeated prices
/// keep their first value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilterQuery {
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub size: Option<String>,
    pub highlight: Option<String>,
}

impl ProductFilterQuery {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.to_ascii_lowercase().as_str() {
                "minprice" => keep_first(&mut query.min_price, value),
                "maxprice" => keep_first(&mut query.max_price, value),
                "size" => join_list(&mut query.size, value),
                "highlight" => join_list(&mut query.highlight, value),
                _ => {}
            }
        }
        query
    }

    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria::from_raw(
            self.min_price.as_deref(),
            self.max_price.as_deref(),
            self.size.as_deref(),
            self.highlight.as_deref(),
        )
    }
}

fn keep_first(slot: &mut Option<String>, value: String) {
    if slot.is_none() {
        *slot = Some(value);
    }
}

fn join_list(slot: &mut Option<String>, value: String) {
    match slot {
        Some(existing) => {
            existing.push(',');
            existing.push_str(&value);
        }
        None => *slot = Some(value),
    }
}
