//! Fixed-point, non-negative price value.
//!
//! Prices are stored as an integer count of 1/10 000 currency units so that
//! comparisons (`minPrice`/`maxPrice` filters) are exact. Floating point only
//! shows up at the JSON boundary, where upstream catalogs send plain numbers.

use core::fmt;
use core::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DomainError, DomainResult};

/// Number of fractional digits a `Price` keeps.
pub const PRICE_FRACTION_DIGITS: usize = 4;

/// Units per whole currency unit (`10^PRICE_FRACTION_DIGITS`).
pub const PRICE_SCALE: u64 = 10_000;

/// Non-negative decimal price with four fractional digits.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Rounding {
    /// Extra non-zero fractional digits are an error.
    Exact,
    /// Extra fractional digits are rounded half-up.
    HalfUp,
    /// Extra non-zero fractional digits round towards +infinity.
    Ceil,
    /// Extra fractional digits are truncated.
    Floor,
}

impl Price {
    pub const ZERO: Price = Price(0);
    pub const MAX: Price = Price(u64::MAX);

    /// Build a price from raw 1/10 000 units.
    pub const fn from_units(units: u64) -> Self {
        Self(units)
    }

    /// Build a price from a whole number of currency units.
    pub fn from_whole(whole: u64) -> DomainResult<Self> {
        whole
            .checked_mul(PRICE_SCALE)
            .map(Self)
            .ok_or_else(|| DomainError::out_of_range(format!("{whole} is out of range")))
    }

    pub const fn units(self) -> u64 {
        self.0
    }

    pub const fn is_whole(self) -> bool {
        self.0 % PRICE_SCALE == 0
    }

    /// Lossy conversion used only for JSON output of fractional prices.
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / PRICE_SCALE as f64
    }

    /// Lenient parse used for upstream documents: more than four fractional
    /// digits are rounded half-up instead of rejected.
    pub fn parse_lenient(s: &str) -> DomainResult<Self> {
        parse_decimal(s, Rounding::HalfUp).map(Self)
    }

    /// Smallest price `>=` the decimal in `s`. Used for inclusive lower bounds.
    pub fn parse_ceil(s: &str) -> DomainResult<Self> {
        parse_decimal(s, Rounding::Ceil).map(Self)
    }

    /// Largest price `<=` the decimal in `s`. Used for inclusive upper bounds.
    pub fn parse_floor(s: &str) -> DomainResult<Self> {
        parse_decimal(s, Rounding::Floor).map(Self)
    }
}

fn parse_decimal(input: &str, rounding: Rounding) -> DomainResult<u64> {
    let s = input.trim();
    if s.starts_with('-') {
        return Err(DomainError::invalid_price(format!("negative price {input:?}")));
    }
    let s = s.strip_prefix('+').unwrap_or(s);

    let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
    if whole.is_empty() && frac.is_empty() {
        return Err(DomainError::invalid_price(format!("no digits in {input:?}")));
    }
    if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(DomainError::invalid_price(format!("not a decimal number: {input:?}")));
    }

    let overflow = || DomainError::out_of_range(format!("{input:?} is out of range"));

    let mut units: u64 = 0;
    for b in whole.bytes() {
        units = units
            .checked_mul(10)
            .and_then(|u| u.checked_add(u64::from(b - b'0')))
            .ok_or_else(overflow)?;
    }
    units = units.checked_mul(PRICE_SCALE).ok_or_else(overflow)?;

    let split = frac.len().min(PRICE_FRACTION_DIGITS);
    let (kept, rest) = frac.split_at(split);

    let mut frac_units: u64 = 0;
    let mut place = PRICE_SCALE;
    for b in kept.bytes() {
        place /= 10;
        frac_units += u64::from(b - b'0') * place;
    }

    if !rest.is_empty() {
        match rounding {
            Rounding::Exact => {
                if rest.bytes().any(|b| b != b'0') {
                    return Err(DomainError::invalid_price(format!(
                        "{input:?} has more than {PRICE_FRACTION_DIGITS} fractional digits"
                    )));
                }
            }
            Rounding::HalfUp => {
                if rest.as_bytes()[0] >= b'5' {
                    frac_units += 1;
                }
            }
            Rounding::Ceil => {
                if rest.bytes().any(|b| b != b'0') {
                    frac_units += 1;
                }
            }
            Rounding::Floor => {}
        }
    }

    units.checked_add(frac_units).ok_or_else(overflow)
}

impl FromStr for Price {
    type Err = DomainError;

    /// Strict parse used for query parameters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s, Rounding::Exact).map(Self)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / PRICE_SCALE;
        let frac = self.0 % PRICE_SCALE;
        if frac == 0 {
            return write!(f, "{whole}");
        }
        let digits = format!("{frac:0width$}", width = PRICE_FRACTION_DIGITS);
        write!(f, "{whole}.{}", digits.trim_end_matches('0'))
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_whole() {
            serializer.serialize_u64(self.0 / PRICE_SCALE)
        } else {
            serializer.serialize_f64(self.as_f64())
        }
    }
}

struct PriceVisitor;

impl<'de> Visitor<'de> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative decimal price")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
        Price::from_whole(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
        let whole = u64::try_from(v)
            .map_err(|_| E::custom(DomainError::invalid_price(format!("negative price {v}"))))?;
        self.visit_u64(whole)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
        if !v.is_finite() {
            return Err(E::custom(DomainError::invalid_price(format!("{v} is not finite"))));
        }
        // Display yields the shortest round-tripping digits, never an exponent.
        Price::parse_lenient(&v.to_string()).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
        Price::parse_lenient(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}
