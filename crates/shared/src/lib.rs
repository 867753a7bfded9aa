//! Shared types, errors, and configuration for Storefront pricing.
//!
//! This crate provides common types used across all other crates:
//! - Currency descriptors for the reference table
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use crate::config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::CurrencyDescriptor;
