//! Pricing service for line item and option prices.
//!
//! Two display formats exist side by side and must stay separate:
//! - Unit prices go through the currency table and are shown with the
//!   currency's decimal digits (`"19.99 USD"`).
//! - Option prices are divided by a fixed 100 regardless of currency and
//!   printed without trailing zeros (`"11 USD"`).

use rust_decimal::Decimal;
use tracing::debug;

use storefront_shared::types::currency::normalize_code;

use super::error::{PricingError, PricingResult};
use super::types::{LineItem, Region};
use crate::currency::{AmountConverter, CurrencyError};

/// Divisor applied to option prices, independent of the currency.
pub const OPTION_PRICE_DIVISOR: Decimal = Decimal::ONE_HUNDRED;

/// Pricing service for line items.
#[derive(Debug, Clone)]
pub struct PricingService {
    converter: AmountConverter,
}

impl PricingService {
    /// Creates a pricing service using the given converter.
    #[must_use]
    pub const fn new(converter: AmountConverter) -> Self {
        Self { converter }
    }

    /// Returns the amount converter.
    #[must_use]
    pub const fn converter(&self) -> &AmountConverter {
        &self.converter
    }

    /// Extract the unit price of an item in a region, in persisted form.
    ///
    /// Resolution order:
    /// 1. The flat `unit_price`, when present.
    /// 2. The entry of `prices` in the region's currency.
    ///
    /// An item with neither a flat price nor any region price is worth `0`.
    /// An item whose region prices do not include the region's currency
    /// fails with [`PricingError::PriceNotFound`].
    ///
    /// With `apply_tax`, a non-zero price is multiplied by
    /// `1 + tax_rate / 100`. A product that does not fit a `Decimal` fails
    /// with [`CurrencyError::AmountOutOfRange`].
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use storefront_core::pricing::{LineItem, PricingService, Region};
    ///
    /// let item = LineItem::with_unit_price(dec!(500));
    /// let region = Region::new("usd", dec!(10));
    /// let price = PricingService::extract_unit_price(&item, &region, true).unwrap();
    /// assert_eq!(price, dec!(550));
    /// ```
    pub fn extract_unit_price(
        item: &LineItem,
        region: &Region,
        apply_tax: bool,
    ) -> PricingResult<Decimal> {
        let price = match item.unit_price {
            Some(unit_price) => unit_price,
            None => resolve_region_price(item, region)?,
        };

        if price.is_zero() {
            return Ok(Decimal::ZERO);
        }

        if apply_tax {
            price
                .checked_mul(region.tax_multiplier())
                .ok_or_else(|| out_of_range(region, price))
        } else {
            Ok(price)
        }
    }

    /// Format the tax-inclusive unit price with its currency code.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use rust_decimal_macros::dec;
    /// use storefront_core::currency::{AmountConverter, CurrencyTable};
    /// use storefront_core::pricing::{LineItem, PricingService, Region};
    ///
    /// let service = PricingService::new(AmountConverter::new(Arc::new(CurrencyTable::bundled())));
    /// let item = LineItem::with_unit_price(dec!(1999));
    /// let formatted = service
    ///     .format_unit_price_with_currency(&item, &Region::new("usd", dec!(0)))
    ///     .unwrap();
    /// assert_eq!(formatted, "19.99 USD");
    /// ```
    pub fn format_unit_price_with_currency(
        &self,
        item: &LineItem,
        region: &Region,
    ) -> PricingResult<String> {
        let code = normalize_code(&region.currency_code);
        let price = Self::extract_unit_price(item, region, true)?;
        let display = self.converter.to_display_amount(&code, price)?;
        Ok(format!("{display} {code}"))
    }

    /// Format an option price with its currency code.
    ///
    /// Computes `raw * (1 + tax_rate / 100) / 100`. The divisor is fixed and
    /// does not depend on the currency's decimal digits; the currency table
    /// is not consulted.
    pub fn format_option_price_with_currency(
        raw: Decimal,
        region: &Region,
    ) -> PricingResult<String> {
        let amount = raw
            .checked_mul(region.tax_multiplier())
            .and_then(|taxed| taxed.checked_div(OPTION_PRICE_DIVISOR))
            .ok_or_else(|| out_of_range(region, raw))?;
        Ok(format!(
            "{} {}",
            amount.normalize(),
            normalize_code(&region.currency_code)
        ))
    }
}

fn out_of_range(region: &Region, amount: Decimal) -> PricingError {
    CurrencyError::AmountOutOfRange {
        code: normalize_code(&region.currency_code),
        amount,
    }
    .into()
}

/// Look up the region-currency entry of an item without a flat price.
fn resolve_region_price(item: &LineItem, region: &Region) -> PricingResult<Decimal> {
    if item.prices.is_empty() {
        debug!(
            currency_code = %region.currency_code,
            "line item has no prices, falling back to zero"
        );
        return Ok(Decimal::ZERO);
    }

    item.price_in(&region.currency_code)
        .map(|price| price.amount)
        .ok_or_else(|| PricingError::PriceNotFound {
            currency_code: region.currency_code.clone(),
        })
}
