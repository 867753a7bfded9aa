//! Storefront price CLI
//!
//! Converts and formats prices with the same currency table the dashboard uses.

mod cli;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use storefront_core::{AmountConverter, CurrencyTable, LineItem, PricingService, Region};
use storefront_shared::config::LoggingConfig;
use storefront_shared::{AppConfig, AppError, AppResult};

use crate::cli::{Cli, Commands, OptionPriceArgs, UnitPriceArgs};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging);

    let table = CurrencyTable::from_config(&config.currencies).map_err(AppError::from)?;
    info!(currencies = table.len(), "currency table ready");
    let service = PricingService::new(AmountConverter::new(Arc::new(table)));

    match run(&service, cli.command) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) => {
            error!(code = err.error_code(), error = %err, "command failed");
            Err(err.into())
        }
    }
}

/// Logs go to stderr so stdout only carries command output.
fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| config.filter.as_str().into());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            config
                .json
                .then(|| fmt::layer().json().with_writer(std::io::stderr)),
        )
        .with((!config.json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .init();
}

fn run(service: &PricingService, command: Commands) -> AppResult<String> {
    let converter = service.converter();
    match command {
        Commands::Digits { code } => Ok(converter.decimal_digits(&code)?.to_string()),
        Commands::Display { code, persisted } => Ok(converter.to_display_amount(&code, persisted)?),
        Commands::Persist { code, display } => {
            Ok(converter.to_persisted_amount(&code, display)?.to_string())
        }
        Commands::UnitPrice(args) => unit_price(service, &args),
        Commands::OptionPrice(args) => option_price(&args),
        Commands::Currencies => Ok(list_currencies(converter.table())),
    }
}

fn unit_price(service: &PricingService, args: &UnitPriceArgs) -> AppResult<String> {
    let item: LineItem = parse_json("item", &args.item)?;
    let region: Region = parse_json("region", &args.region)?;

    if args.format {
        return Ok(service.format_unit_price_with_currency(&item, &region)?);
    }
    let price = PricingService::extract_unit_price(&item, &region, !args.no_tax)?;
    Ok(price.normalize().to_string())
}

fn option_price(args: &OptionPriceArgs) -> AppResult<String> {
    let region = Region::new(args.currency.clone(), args.tax_rate);
    Ok(PricingService::format_option_price_with_currency(args.amount, &region)?)
}

fn list_currencies(table: &CurrencyTable) -> String {
    table
        .descriptors()
        .iter()
        .map(|descriptor| {
            format!(
                "{}\t{}\t{}",
                descriptor.code, descriptor.decimal_digits, descriptor.name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_json<T: serde::de::DeserializeOwned>(what: &str, source: &str) -> AppResult<T> {
    serde_json::from_str(source).map_err(|err| AppError::Validation(format!("invalid {what}: {err}")))
}
