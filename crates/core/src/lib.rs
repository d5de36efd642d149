//! `prodfilter-core` — shared value types.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod price;

pub use error::{DomainError, DomainResult};
pub use price::{Price, PRICE_FRACTION_DIGITS, PRICE_SCALE};
