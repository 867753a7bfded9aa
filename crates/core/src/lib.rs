//! Core pricing logic for Storefront.
//!
//! This crate contains pure business logic with ZERO network or UI dependencies.
//! Everything here is a synchronous function of its inputs and the immutable
//! currency reference table.
//!
//! # Modules
//!
//! - `currency` - Currency reference table and persisted/display amount conversion
//! - `pricing` - Line item price extraction and price formatting

pub mod currency;
pub mod pricing;

pub use currency::{AmountConverter, CurrencyError, CurrencyTable};
pub use pricing::{LineItem, MoneyAmount, PricingError, PricingService, Region};
