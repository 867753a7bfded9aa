//! Currency reference table.
//!
//! The table is built once at startup from the bundled catalog and the
//! configured overrides, then shared read-only (usually behind an `Arc`).

use std::collections::HashMap;

use storefront_shared::CurrencyDescriptor;
use storefront_shared::config::{CurrencyConfig, CurrencyOverride};
use storefront_shared::types::currency::normalize_code;
use tracing::{debug, warn};

use super::catalog::BUNDLED;
use super::error::{CurrencyError, CurrencyResult};

/// Largest supported decimal-digit count (the `Decimal` scale limit).
pub const MAX_DECIMAL_DIGITS: u32 = 28;

/// Immutable mapping from uppercase currency code to its descriptor.
#[derive(Debug, Clone, Default)]
pub struct CurrencyTable {
    entries: HashMap<String, CurrencyDescriptor>,
}

impl CurrencyTable {
    /// Creates a table from the bundled ISO 4217 catalog.
    #[must_use]
    pub fn bundled() -> Self {
        let entries = BUNDLED
            .iter()
            .map(|entry| (entry.code.to_string(), entry.to_descriptor()))
            .collect();
        Self { entries }
    }

    /// Builds the table described by configuration.
    ///
    /// Starts from the bundled catalog unless `include_bundled` is false,
    /// then applies every override on top.
    pub fn from_config(config: &CurrencyConfig) -> CurrencyResult<Self> {
        let mut table = if config.include_bundled {
            Self::bundled()
        } else {
            warn!("bundled currency catalog disabled, only configured currencies are known");
            Self::default()
        };

        for item in &config.overrides {
            let descriptor = validate(descriptor_from_override(item))?;
            if table.entries.contains_key(&descriptor.code) {
                debug!(
                    code = %descriptor.code,
                    decimal_digits = descriptor.decimal_digits,
                    "currency override replaces bundled entry"
                );
            }
            table.entries.insert(descriptor.code.clone(), descriptor);
        }

        debug!(currencies = table.len(), "currency table loaded");
        Ok(table)
    }

    /// Looks up a currency, case-insensitively.
    pub fn lookup(&self, code: &str) -> CurrencyResult<&CurrencyDescriptor> {
        self.get(code)
            .ok_or_else(|| CurrencyError::UnknownCurrency(normalize_code(code)))
    }

    /// Looks up a currency, returning `None` when it is unknown.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&CurrencyDescriptor> {
        self.entries.get(&normalize_code(code))
    }

    /// Number of known currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no currency is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Descriptors ordered by code.
    #[must_use]
    pub fn descriptors(&self) -> Vec<&CurrencyDescriptor> {
        let mut descriptors: Vec<&CurrencyDescriptor> = self.entries.values().collect();
        descriptors.sort_unstable_by(|a, b| a.code.cmp(&b.code));
        descriptors
    }
}

fn descriptor_from_override(item: &CurrencyOverride) -> CurrencyDescriptor {
    let code = normalize_code(&item.code);
    CurrencyDescriptor::new(
        &code,
        item.name.clone().unwrap_or_else(|| code.clone()),
        item.symbol_native.clone().unwrap_or_else(|| code.clone()),
        item.decimal_digits,
    )
}

fn validate(descriptor: CurrencyDescriptor) -> CurrencyResult<CurrencyDescriptor> {
    if descriptor.code.trim().is_empty() {
        return Err(CurrencyError::InvalidDescriptor {
            code: descriptor.code,
            reason: "currency code is empty".to_string(),
        });
    }
    if descriptor.decimal_digits > MAX_DECIMAL_DIGITS {
        return Err(CurrencyError::InvalidDescriptor {
            reason: format!(
                "{} decimal digits exceeds the maximum of {MAX_DECIMAL_DIGITS}",
                descriptor.decimal_digits
            ),
            code: descriptor.code,
        });
    }
    Ok(descriptor)
}
