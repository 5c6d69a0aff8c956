//! Rate configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `PARKWISE_HOURLY_RATE` - Price per started hour (default: 20)
//! - `PARKWISE_DAILY_CAP` - Maximum charge per session (default: 200)
//! - `PARKWISE_CURRENCY` - ISO 4217 code: INR, USD, or EUR (default: INR)

use parkwise_core::{CurrencyCode, Money, RateConfig, RateConfigError};
use rust_decimal::Decimal;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
    #[error(transparent)]
    Rates(#[from] RateConfigError),
}

/// Load the effective [`RateConfig`] from environment variables.
///
/// Calls `dotenvy::dotenv()` to load from `.env` file if present. Values fall
/// back to the campus defaults when unset.
///
/// # Errors
///
/// Returns `ConfigError` if a variable fails to parse or the resulting rates
/// are invalid (non-positive, mismatched currencies).
pub fn rates_from_env() -> Result<RateConfig, ConfigError> {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    let currency = get_env_or_default("PARKWISE_CURRENCY", "INR")
        .parse::<CurrencyCode>()
        .map_err(|e| ConfigError::InvalidEnvVar("PARKWISE_CURRENCY", e))?;
    let hourly_rate = get_decimal("PARKWISE_HOURLY_RATE", "20")?;
    let daily_cap = get_decimal("PARKWISE_DAILY_CAP", "200")?;

    Ok(RateConfig::new(
        Money::new(hourly_rate, currency),
        Money::new(daily_cap, currency),
    )?)
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a decimal-valued environment variable with a default value.
fn get_decimal(key: &'static str, default: &str) -> Result<Decimal, ConfigError> {
    get_env_or_default(key, default)
        .parse::<Decimal>()
        .map_err(|e| ConfigError::InvalidEnvVar(key, e.to_string()))
}
