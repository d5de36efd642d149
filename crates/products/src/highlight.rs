//! Case-insensitive term highlighting inside product descriptions.
//!
//! Terms are applied one after another. Once a span is wrapped it is masked:
//! later terms never match inside a highlighted span or inside the inserted
//! markers, so nothing is ever double-wrapped.

use regex::{Regex, RegexBuilder};

use crate::product::Product;

pub const HIGHLIGHT_OPEN: &str = "<em>";
pub const HIGHLIGHT_CLOSE: &str = "</em>";

#[derive(Debug, Clone, Copy)]
struct Segment<'t> {
    text: &'t str,
    highlighted: bool,
}

/// Compiled set of highlight terms, reusable across many descriptions.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    matchers: Vec<Regex>,
}

impl Highlighter {
    /// Compile the terms in order. Terms are trimmed; blank terms are skipped.
    pub fn new<S: AsRef<str>>(terms: &[S]) -> Self {
        let matchers = terms
            .iter()
            .map(|t| t.as_ref().trim())
            .filter(|t| !t.is_empty())
            // A literal only fails to compile past the regex size limit; such a
            // term simply never matches.
            .filter_map(|t| {
                RegexBuilder::new(&regex::escape(t))
                    .case_insensitive(true)
                    .build()
                    .ok()
            })
            .collect();
        Self { matchers }
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Wrap every match of every term, keeping the matched text's casing.
    pub fn highlight(&self, text: &str) -> String {
        if self.matchers.is_empty() {
            return text.to_string();
        }

        let mut segments = vec![Segment {
            text,
            highlighted: false,
        }];
        for re in &self.matchers {
            segments = segments
                .into_iter()
                .flat_map(|seg| split_segment(seg, re))
                .collect();
        }

        let mut out = String::with_capacity(text.len());
        for seg in segments {
            if seg.highlighted {
                out.push_str(HIGHLIGHT_OPEN);
                out.push_str(seg.text);
                out.push_str(HIGHLIGHT_CLOSE);
            } else {
                out.push_str(seg.text);
            }
        }
        out
    }

    /// Copy of `product` with its description highlighted; other fields untouched.
    pub fn highlight_product(&self, product: &Product) -> Product {
        Product {
            description: product.description.as_deref().map(|d| self.highlight(d)),
            ..product.clone()
        }
    }
}

fn split_segment<'t>(seg: Segment<'t>, re: &Regex) -> Vec<Segment<'t>> {
    if seg.highlighted {
        return vec![seg];
    }

    let mut out = Vec::new();
    let mut last = 0;
    for m in re.find_iter(seg.text) {
        if m.start() > last {
            out.push(Segment {
                text: &seg.text[last..m.start()],
                highlighted: false,
            });
        }
        out.push(Segment {
            text: m.as_str(),
            highlighted: true,
        });
        last = m.end();
    }
    if last < seg.text.len() {
        out.push(Segment {
            text: &seg.text[last..],
            highlighted: false,
        });
    }
    out
}

/// Highlight `terms` in a single text.
pub fn highlight_description<S: AsRef<str>>(text: &str, terms: &[S]) -> String {
    Highlighter::new(terms).highlight(text)
}

/// Highlight `terms` in the descriptions of `products`, preserving order.
pub fn highlight_products<'a, I, S>(products: I, terms: &[S]) -> Vec<Product>
where
    I: IntoIterator<Item = &'a Product>,
    S: AsRef<str>,
{
    let highlighter = Highlighter::new(terms);
    if highlighter.is_empty() {
        return products.into_iter().cloned().collect();
    }
    products
        .into_iter()
        .map(|p| highlighter.highlight_product(p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodfilter_core::Price;

    #[test]
    fn keeps_original_casing() {
        assert_eq!(
            highlight_description("This Shirt is great", &["shirt"]),
            "This <em>Shirt</em> is great"
        );
    }

    #[test]
    fn wraps_every_occurrence() {
        assert_eq!(
            highlight_description("shirt, SHIRT and sHiRt", &["Shirt"]),
            "<em>shirt</em>, <em>SHIRT</em> and <em>sHiRt</em>"
        );
    }

    #[test]
    fn matches_inside_words() {
        assert_eq!(
            highlight_description("T-shirts", &["shirt"]),
            "T-<em>shirt</em>s"
        );
    }

    #[test]
    fn highlighted_spans_are_masked_from_later_terms() {
        assert_eq!(highlight_description("shirt", &["shirt", "hi"]), "<em>shirt</em>");
        assert_eq!(
            highlight_description("shirt and hi", &["shirt", "hi"]),
            "<em>shirt</em> and <em>hi</em>"
        );
    }

    #[test]
    fn inserted_markers_are_never_matched() {
        assert_eq!(
            highlight_description("red item", &["red", "em", "<"]),
            "<em>red</em> it<em>em</em>"
        );
    }

    #[test]
    fn repeated_term_does_not_double_wrap() {
        assert_eq!(
            highlight_description("green shirt", &["green", "GREEN"]),
            "<em>green</em> shirt"
        );
    }

    #[test]
    fn terms_are_trimmed_and_blank_terms_skipped() {
        assert_eq!(
            highlight_description("blue shirt", &["  blue ", "", "   "]),
            "<em>blue</em> shirt"
        );
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        assert_eq!(highlight_description("a.b axb", &["a.b"]), "<em>a.b</em> axb");
        assert_eq!(highlight_description("(x)", &["(x)"]), "<em>(x)</em>");
    }

    #[test]
    fn no_terms_is_noop() {
        let terms: [&str; 0] = [];
        assert_eq!(highlight_description("anything", &terms), "anything");
        assert!(Highlighter::new(&terms).is_empty());
    }

    #[test]
    fn non_ascii_text_is_handled() {
        assert_eq!(
            highlight_description("Ärmel und ÄRMEL", &["ärmel"]),
            "<em>Ärmel</em> und <em>ÄRMEL</em>"
        );
    }

    #[test]
    fn only_description_is_rewritten() {
        let products = vec![
            Product::new(Price::from_units(10))
                .with_title("Green shirt")
                .with_sizes(["M"])
                .with_description("A green shirt"),
            Product::new(Price::from_units(20)).with_title("No description"),
        ];

        let out = highlight_products(&products, &["green"]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].title.as_deref(), Some("Green shirt"));
        assert_eq!(out[0].sizes, vec!["M"]);
        assert_eq!(out[0].price, products[0].price);
        assert_eq!(out[0].description.as_deref(), Some("A <em>green</em> shirt"));
        assert_eq!(out[1], products[1]);
        // Input untouched.
        assert_eq!(products[0].description.as_deref(), Some("A green shirt"));
    }

    #[test]
    fn blank_terms_copy_products_unchanged() {
        let products = vec![Product::new(Price::from_units(10)).with_description("A green shirt")];
        assert_eq!(highlight_products(&products, &[" ", ""]), products);
    }
}
