//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

/// Storefront price conversion.
#[derive(Parser, Debug)]
#[command(name = "storefront-price")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the decimal digits of a currency
    Digits {
        /// Currency code, any case
        code: String,
    },

    /// Format a persisted amount for display
    Display {
        /// Currency code, any case
        code: String,
        /// Amount in the smallest sub-unit
        persisted: Decimal,
    },

    /// Convert a display amount to its persisted form
    Persist {
        /// Currency code, any case
        code: String,
        /// Amount in the major unit
        display: Decimal,
    },

    /// Price a line item in a region
    UnitPrice(UnitPriceArgs),

    /// Format a product option price
    OptionPrice(OptionPriceArgs),

    /// List the loaded currency table
    Currencies,
}

/// Arguments for `storefront-price unit-price`.
#[derive(Args, Debug)]
pub struct UnitPriceArgs {
    /// Line item JSON, e.g. '{"unit_price": 1999}'
    #[arg(long)]
    pub item: String,

    /// Region JSON, e.g. '{"currency_code": "usd", "tax_rate": 10}'
    #[arg(long)]
    pub region: String,

    /// Print the net price instead of the tax-inclusive one
    #[arg(long, conflicts_with = "format")]
    pub no_tax: bool,

    /// Print the formatted display price with its currency code
    #[arg(long)]
    pub format: bool,
}

/// Arguments for `storefront-price option-price`.
#[derive(Args, Debug)]
pub struct OptionPriceArgs {
    /// Raw option amount
    pub amount: Decimal,

    /// Region currency code
    #[arg(long)]
    pub currency: String,

    /// Region tax rate in percent
    #[arg(long, default_value = "0")]
    pub tax_rate: Decimal,
}
