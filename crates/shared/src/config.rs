//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Currency reference table configuration.
    #[serde(default)]
    pub currencies: CurrencyConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "storefront=info".to_string()
}

/// Currency reference table configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyConfig {
    /// Start from the bundled ISO 4217 catalog.
    #[serde(default = "default_include_bundled")]
    pub include_bundled: bool,
    /// Extra or replacement table entries.
    #[serde(default)]
    pub overrides: Vec<CurrencyOverride>,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            include_bundled: default_include_bundled(),
            overrides: Vec::new(),
        }
    }
}

fn default_include_bundled() -> bool {
    true
}

/// A configured currency table entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrencyOverride {
    /// Currency code, any case.
    pub code: String,
    /// Number of fractional digits used when displaying amounts.
    pub decimal_digits: u32,
    /// Human readable name. Defaults to the code.
    #[serde(default)]
    pub name: Option<String>,
    /// Native symbol. Defaults to the code.
    #[serde(default)]
    pub symbol_native: Option<String>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("STOREFRONT").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or does not match
    /// the configuration schema.
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
