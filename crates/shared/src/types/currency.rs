//! Currency reference records.
//!
//! A descriptor is read-only reference data: it tells the pricing code how
//! many fractional digits a currency is displayed with. Amounts themselves
//! never live here.

use serde::{Deserialize, Serialize};

/// One entry of the currency reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyDescriptor {
    /// ISO 4217 currency code, always uppercase (e.g., "USD", "JPY").
    pub code: String,
    /// Human readable name (e.g., "US Dollar").
    pub name: String,
    /// Symbol as written in the currency's home locale (e.g., "$", "￥").
    pub symbol_native: String,
    /// Number of fractional digits used when displaying amounts.
    pub decimal_digits: u32,
}

impl CurrencyDescriptor {
    /// Creates a new descriptor, uppercasing the code.
    #[must_use]
    pub fn new(
        code: impl AsRef<str>,
        name: impl Into<String>,
        symbol_native: impl Into<String>,
        decimal_digits: u32,
    ) -> Self {
        Self {
            code: normalize_code(code.as_ref()),
            name: name.into(),
            symbol_native: symbol_native.into(),
            decimal_digits,
        }
    }
}

impl std::fmt::Display for CurrencyDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code, self.name)
    }
}

/// Normalizes a currency code for table lookups.
///
/// Codes arrive from the commerce API in lowercase (`"usd"`) while the
/// reference table is keyed by uppercase ISO codes.
#[must_use]
pub fn normalize_code(code: &str) -> String {
    code.to_uppercase()
}
