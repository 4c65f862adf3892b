//! Unit prices.

use core::fmt;

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult};

/// Unit price of a product.
///
/// Held as whole cents so valuation math stays exact. At the JSON boundary
/// it is a decimal string (e.g. `"29.99"`) with at most two fractional
/// digits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price(u64);

impl Price {
    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Parse a decimal string such as `"30"`, `"8.9"` or `"29.99"`.
    ///
    /// Signs, exponents, separators and more than two fractional digits are
    /// rejected.
    pub fn parse(s: &str) -> DomainResult<Self> {
        let invalid = || DomainError::validation("price must be a decimal string like \"29.99\"");

        let (units_part, cents_part) = match s.split_once('.') {
            Some((units, frac)) => (units, frac),
            None => (s, ""),
        };
        if units_part.is_empty() || !units_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if s.contains('.') && (cents_part.is_empty() || cents_part.len() > 2) {
            return Err(invalid());
        }
        if !cents_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let units: u64 = units_part.parse().map_err(|_| invalid())?;
        let cents: u64 = match cents_part.len() {
            0 => 0,
            1 => cents_part.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => cents_part.parse().map_err(|_| invalid())?,
        };
        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl TryFrom<String> for Price {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Price> for String {
    fn from(value: Price) -> Self {
        value.to_string()
    }
}
