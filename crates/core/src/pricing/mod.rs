//! Line item price extraction and formatting.
//!
//! This module implements:
//! - Read-only line item and region types as received from the commerce API
//! - Tax-inclusive unit price extraction
//! - The unit price and option price display formats

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::{PricingError, PricingResult};
pub use service::PricingService;
pub use types::{LineItem, MoneyAmount, Region};
