//! Conversion between persisted and display amounts.
//!
//! A persisted amount is an integer count of the currency's smallest
//! sub-unit (cents for USD). A display amount is the same value in the
//! major unit, formatted to the currency's decimal-digit count.
//!
//! CRITICAL: both directions floor their input *before* scaling:
//! - `display = floor(persisted) / 10^digits`
//! - `persisted = floor(display) * 10^digits`
//!
//! The second rule drops the whole fractional part of a display amount
//! (19.99 USD persists as 1900). Conversions therefore do not round-trip.

use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

use storefront_shared::types::currency::normalize_code;

use super::error::{CurrencyError, CurrencyResult};
use super::table::CurrencyTable;

/// Converts amounts using an injected currency reference table.
#[derive(Debug, Clone)]
pub struct AmountConverter {
    table: Arc<CurrencyTable>,
}

impl AmountConverter {
    /// Creates a converter backed by the given table.
    #[must_use]
    pub const fn new(table: Arc<CurrencyTable>) -> Self {
        Self { table }
    }

    /// Returns the underlying reference table.
    #[must_use]
    pub fn table(&self) -> &CurrencyTable {
        &self.table
    }

    /// Number of fractional digits used to display `code`.
    ///
    /// The lookup is case-insensitive. Unknown codes fail with
    /// [`CurrencyError::UnknownCurrency`].
    pub fn decimal_digits(&self, code: &str) -> CurrencyResult<u32> {
        Ok(self.table.lookup(code)?.decimal_digits)
    }

    /// The divisor/multiplier between persisted and display amounts
    /// (`10^decimal_digits`).
    pub fn scale_factor(&self, code: &str) -> CurrencyResult<Decimal> {
        let digits = self.decimal_digits(code)?;
        Ok(Decimal::from_i128_with_scale(10_i128.pow(digits), 0))
    }

    /// Persisted amount expressed in the major unit, without formatting.
    pub fn normalize_amount(&self, code: &str, persisted: Decimal) -> CurrencyResult<Decimal> {
        let divisor = self.scale_factor(code)?;
        Ok(persisted.floor() / divisor)
    }

    /// Formats a persisted amount for display.
    ///
    /// The result always carries exactly `decimal_digits` fractional digits.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use rust_decimal_macros::dec;
    /// use storefront_core::currency::{AmountConverter, CurrencyTable};
    ///
    /// let converter = AmountConverter::new(Arc::new(CurrencyTable::bundled()));
    /// assert_eq!(converter.to_display_amount("usd", dec!(1999)).unwrap(), "19.99");
    /// assert_eq!(converter.to_display_amount("JPY", dec!(1999)).unwrap(), "1999");
    /// ```
    pub fn to_display_amount(&self, code: &str, persisted: Decimal) -> CurrencyResult<String> {
        let digits = self.decimal_digits(code)?;
        let mut normalized = self.normalize_amount(code, persisted)?;
        normalized.rescale(digits);
        Ok(normalized.to_string())
    }

    /// Converts a display amount to its persisted integer form.
    ///
    /// The display amount is truncated to a whole number before scaling.
    pub fn to_persisted_amount(&self, code: &str, display: Decimal) -> CurrencyResult<i64> {
        let multiplier = self.scale_factor(code)?;
        let out_of_range = || CurrencyError::AmountOutOfRange {
            code: normalize_code(code),
            amount: display,
        };

        truncate_display_amount(display)
            .checked_mul(multiplier)
            .and_then(|persisted| persisted.to_i64())
            .ok_or_else(out_of_range)
    }
}

/// Whole-unit part of a display amount used by [`AmountConverter::to_persisted_amount`].
fn truncate_display_amount(display: Decimal) -> Decimal {
    display.floor()
}
