//! Currency reference data and amount conversion.

pub mod catalog;
pub mod conversion;
pub mod error;
pub mod table;

#[cfg(test)]
mod props;

pub use conversion::AmountConverter;
pub use error::{CurrencyError, CurrencyResult};
pub use table::{CurrencyTable, MAX_DECIMAL_DIGITS};
