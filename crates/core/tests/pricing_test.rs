//! Integration tests for the public pricing API.
//!
//! Builds the currency table from configuration the way a binary does at
//! startup, then prices API payloads end to end.

use std::sync::Arc;
use std::thread;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use storefront_core::{
    AmountConverter, CurrencyError, CurrencyTable, LineItem, PricingError, PricingService, Region,
};
use storefront_shared::{AppConfig, AppError};

/// Configuration adding a precious-metal currency and making HUF show fillér.
const CONFIG: &str = r#"
[[currencies.overrides]]
code = "xau"
name = "Gold (troy ounce)"
decimal_digits = 4

[[currencies.overrides]]
code = "HUF"
decimal_digits = 2
"#;

fn service() -> PricingService {
    let config = AppConfig::from_toml(CONFIG).unwrap();
    let table = CurrencyTable::from_config(&config.currencies).unwrap();
    PricingService::new(AmountConverter::new(Arc::new(table)))
}

#[test]
fn test_configured_currencies_are_used() {
    let service = service();
    let converter = service.converter();

    assert_eq!(converter.decimal_digits("xau").unwrap(), 4);
    assert_eq!(converter.decimal_digits("huf").unwrap(), 2);
    assert_eq!(converter.to_display_amount("XAU", dec!(12345)).unwrap(), "1.2345");
    assert_eq!(converter.to_persisted_amount("xau", dec!(1.2345)).unwrap(), 10000);
}

#[test]
fn test_price_api_payload() {
    let item: LineItem = serde_json::from_str(
        r#"{"prices": [{"currency_code": "usd", "amount": 1999}, {"currency_code": "jpy", "amount": 2500}]}"#,
    )
    .unwrap();
    let usd: Region = serde_json::from_str(r#"{"currency_code": "usd", "tax_rate": 10}"#).unwrap();
    let jpy: Region = serde_json::from_str(r#"{"currency_code": "jpy", "tax_rate": 0}"#).unwrap();

    let service = service();
    assert_eq!(
        service.format_unit_price_with_currency(&item, &usd).unwrap(),
        "21.98 USD"
    );
    assert_eq!(
        service.format_unit_price_with_currency(&item, &jpy).unwrap(),
        "2500 JPY"
    );
}

#[test]
fn test_missing_region_price_maps_to_not_found() {
    let item = LineItem::with_prices(vec![storefront_core::MoneyAmount::new("usd", dec!(100))]);
    let region = Region::new("eur", Decimal::ZERO);

    let err = service()
        .format_unit_price_with_currency(&item, &region)
        .unwrap_err();
    assert!(matches!(err, PricingError::PriceNotFound { .. }));

    let app_err: AppError = err.into();
    assert_eq!(app_err.error_code(), "NOT_FOUND");
}

#[test]
fn test_unknown_currency_propagates() {
    let err = service()
        .converter()
        .to_display_amount("zzz", dec!(1))
        .unwrap_err();
    assert_eq!(err, CurrencyError::UnknownCurrency("ZZZ".to_string()));
}

#[test]
fn test_shared_table_across_threads() {
    let service = service();
    let handles: Vec<_> = ["usd", "eur", "jpy", "kwd"]
        .into_iter()
        .map(|code| {
            let service = service.clone();
            thread::spawn(move || {
                service
                    .format_unit_price_with_currency(
                        &LineItem::with_unit_price(dec!(123456)),
                        &Region::new(code, Decimal::ZERO),
                    )
                    .unwrap()
            })
        })
        .collect();

    let results: Vec<String> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(
        results,
        vec!["1234.56 USD", "1234.56 EUR", "123456 JPY", "123.456 KWD"]
    );
}
