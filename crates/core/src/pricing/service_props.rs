//! Property-based tests for the pricing service.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::PricingService;
use super::types::{LineItem, MoneyAmount, Region};

/// Strategy to generate persisted prices (0 to 1,000,000.00 in cents).
fn price() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(Decimal::from)
}

/// Strategy to generate tax rates (0.00% to 50.00%).
fn tax_rate() -> impl Strategy<Value = Decimal> {
    (0i64..5_000).prop_map(|basis| Decimal::new(basis, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Taxed price equals net price times the region's multiplier.
    #[test]
    fn prop_tax_is_applied_multiplicatively(net in price(), rate in tax_rate()) {
        let item = LineItem::with_unit_price(net);
        let region = Region::new("usd", rate);

        let taxed = PricingService::extract_unit_price(&item, &region, true).unwrap();
        let untaxed = PricingService::extract_unit_price(&item, &region, false).unwrap();

        prop_assert_eq!(untaxed, net);
        prop_assert_eq!(taxed, net * (Decimal::ONE + rate / Decimal::ONE_HUNDRED));
        prop_assert!(taxed >= untaxed);
    }

    /// A flat price and an equal region price resolve identically.
    #[test]
    fn prop_flat_and_region_price_agree(net in price(), rate in tax_rate()) {
        let region = Region::new("eur", rate);
        let flat = LineItem::with_unit_price(net);
        let listed = LineItem::with_prices(vec![
            MoneyAmount::new("usd", net + Decimal::ONE),
            MoneyAmount::new("eur", net),
        ]);

        prop_assert_eq!(
            PricingService::extract_unit_price(&flat, &region, true).unwrap(),
            PricingService::extract_unit_price(&listed, &region, true).unwrap()
        );
    }

    /// Option prices never carry trailing zeros and always end in the code.
    #[test]
    fn prop_option_price_is_normalized(raw in price(), rate in tax_rate()) {
        let formatted =
            PricingService::format_option_price_with_currency(raw, &Region::new("sek", rate)).unwrap();
        let (amount, code) = formatted.split_once(' ').unwrap();

        prop_assert_eq!(code, "SEK");
        if amount.contains('.') {
            prop_assert!(!amount.ends_with('0'), "{}", formatted);
        }
    }
}
