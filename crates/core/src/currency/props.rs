//! Property-based tests for amount conversion.

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::catalog::BUNDLED;
use super::conversion::AmountConverter;
use super::table::CurrencyTable;

fn converter() -> AmountConverter {
    AmountConverter::new(Arc::new(CurrencyTable::bundled()))
}

/// Strategy to pick any bundled currency code, in random case.
fn bundled_code() -> impl Strategy<Value = String> {
    (0..BUNDLED.len(), any::<bool>()).prop_map(|(index, lower)| {
        let code = BUNDLED[index].code;
        if lower { code.to_lowercase() } else { code.to_string() }
    })
}

/// Strategy to generate persisted amounts (0 to 10,000,000,000 sub-units).
fn persisted_amount() -> impl Strategy<Value = i64> {
    0i64..10_000_000_000
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Display output always has exactly `decimal_digits` fractional digits.
    #[test]
    fn prop_display_has_exact_fraction_digits(
        code in bundled_code(),
        persisted in persisted_amount(),
    ) {
        let converter = converter();
        let digits = converter.decimal_digits(&code).unwrap() as usize;
        let display = converter.to_display_amount(&code, Decimal::from(persisted)).unwrap();

        let fraction_len = display.split_once('.').map_or(0, |(_, fraction)| fraction.len());
        prop_assert_eq!(fraction_len, digits, "{} -> {}", persisted, display);
    }

    /// Lookups ignore case.
    #[test]
    fn prop_decimal_digits_case_insensitive(code in bundled_code()) {
        let converter = converter();
        prop_assert_eq!(
            converter.decimal_digits(&code.to_lowercase()).unwrap(),
            converter.decimal_digits(&code.to_uppercase()).unwrap()
        );
    }

    /// Persisting a display amount only keeps its whole-unit part.
    #[test]
    fn prop_persist_after_display_drops_fraction(
        code in bundled_code(),
        persisted in persisted_amount(),
    ) {
        let converter = converter();
        let scale = converter.scale_factor(&code).unwrap();
        let display = converter.to_display_amount(&code, Decimal::from(persisted)).unwrap();
        let display = Decimal::from_str_exact(&display).unwrap();

        let expected = (Decimal::from(persisted) / scale).floor() * scale;
        prop_assert_eq!(
            Decimal::from(converter.to_persisted_amount(&code, display).unwrap()),
            expected
        );
    }

    /// Fractional persisted amounts display like their floor.
    #[test]
    fn prop_fractional_persisted_is_floored(
        code in bundled_code(),
        persisted in persisted_amount(),
        fraction in 0u32..100,
    ) {
        let converter = converter();
        let drifted = Decimal::from(persisted) + Decimal::new(i64::from(fraction), 2);
        prop_assert_eq!(
            converter.to_display_amount(&code, drifted).unwrap(),
            converter.to_display_amount(&code, Decimal::from(persisted)).unwrap()
        );
    }
}
