//! Product catalog domain module.
//!
//! This crate contains the filtering, highlighting and word-frequency rules for
//! a fetched catalog, implemented purely as deterministic domain logic (no IO,
//! no HTTP, no logging).

pub mod criteria;
pub mod filter;
pub mod frequency;
pub mod highlight;
pub mod product;
pub mod summary;

pub use criteria::{split_list, FilterCriteria};
pub use filter::filter_products;
pub use frequency::{common_words, rank_words, tokenize, WordCount, COMMON_WORDS_SKIP, COMMON_WORDS_TAKE};
pub use highlight::{highlight_description, highlight_products, Highlighter, HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
pub use product::{ApiKey, CatalogDocument, Product};
pub use summary::{FilterInfo, FilteredResponse};
