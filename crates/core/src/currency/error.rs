//! Currency error types.

use rust_decimal::Decimal;
use thiserror::Error;

use storefront_shared::AppError;

/// Result type alias using `CurrencyError`.
pub type CurrencyResult<T> = Result<T, CurrencyError>;

/// Errors that can occur during currency lookups and conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// The currency code is not present in the reference table.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// The converted amount does not fit a persisted integer amount.
    #[error("Amount {amount} in {code} is out of range")]
    AmountOutOfRange {
        /// Currency code of the amount.
        code: String,
        /// The amount that could not be converted.
        amount: Decimal,
    },

    /// A configured table entry is malformed.
    #[error("Invalid currency descriptor {code:?}: {reason}")]
    InvalidDescriptor {
        /// Code of the rejected entry.
        code: String,
        /// Why the entry was rejected.
        reason: String,
    },
}

impl From<CurrencyError> for AppError {
    fn from(err: CurrencyError) -> Self {
        match err {
            CurrencyError::UnknownCurrency(_) => Self::NotFound(err.to_string()),
            CurrencyError::AmountOutOfRange { .. } | CurrencyError::InvalidDescriptor { .. } => {
                Self::Validation(err.to_string())
            }
        }
    }
}
