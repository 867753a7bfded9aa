//! Pricing error types.

use thiserror::Error;

use storefront_shared::AppError;

use crate::currency::CurrencyError;

/// Result type alias using `PricingError`.
pub type PricingResult<T> = Result<T, PricingError>;

/// Errors that can occur while pricing a line item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// The item has region prices, but none in the region's currency.
    #[error("No price found for currency {currency_code}")]
    PriceNotFound {
        /// Currency code of the region being priced.
        currency_code: String,
    },

    /// Currency lookup or conversion failed.
    #[error(transparent)]
    Currency(#[from] CurrencyError),
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::PriceNotFound { .. } => Self::NotFound(err.to_string()),
            PricingError::Currency(inner) => inner.into(),
        }
    }
}
