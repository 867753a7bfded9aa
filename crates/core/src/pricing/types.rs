//! Pricing input types.
//!
//! These mirror the commerce API payloads. They are only ever read here;
//! unknown JSON fields are ignored so full API objects deserialize as-is.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in one currency, in persisted (smallest sub-unit) form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyAmount {
    /// Currency code as sent by the API (usually lowercase).
    pub currency_code: String,
    /// Amount in the currency's smallest sub-unit.
    pub amount: Decimal,
}

impl MoneyAmount {
    /// Creates a new money amount.
    #[must_use]
    pub fn new(currency_code: impl Into<String>, amount: Decimal) -> Self {
        Self {
            currency_code: currency_code.into(),
            amount,
        }
    }
}

/// A purchasable item: either a flat unit price or per-currency prices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Flat unit price, already in the region's currency.
    #[serde(default)]
    pub unit_price: Option<Decimal>,
    /// Per-currency prices, used when there is no flat unit price.
    #[serde(default)]
    pub prices: Vec<MoneyAmount>,
}

impl LineItem {
    /// Creates an item with a flat unit price.
    #[must_use]
    pub fn with_unit_price(unit_price: Decimal) -> Self {
        Self {
            unit_price: Some(unit_price),
            prices: Vec::new(),
        }
    }

    /// Creates an item priced per currency.
    #[must_use]
    pub fn with_prices(prices: Vec<MoneyAmount>) -> Self {
        Self {
            unit_price: None,
            prices,
        }
    }

    /// Returns the price listed for exactly `currency_code`.
    ///
    /// Codes are compared as sent by the API, so `"USD"` does not match `"usd"`.
    #[must_use]
    pub fn price_in(&self, currency_code: &str) -> Option<&MoneyAmount> {
        self.prices
            .iter()
            .find(|price| price.currency_code == currency_code)
    }
}

/// A market with its own currency and tax rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Currency prices in this region are expressed in.
    pub currency_code: String,
    /// Tax rate in percent (10 means 10 %).
    #[serde(default)]
    pub tax_rate: Decimal,
}

impl Region {
    /// Creates a new region.
    #[must_use]
    pub fn new(currency_code: impl Into<String>, tax_rate: Decimal) -> Self {
        Self {
            currency_code: currency_code.into(),
            tax_rate,
        }
    }

    /// Multiplier applied to net prices: `1 + tax_rate / 100`.
    #[must_use]
    pub fn tax_multiplier(&self) -> Decimal {
        Decimal::ONE + self.tax_rate / Decimal::ONE_HUNDRED
    }
}
