//! Charge computation command.
//!
//! # Usage
//!
//! ```bash
//! # From an elapsed duration
//! pw-cli charge --minutes 65
//!
//! # From entry/exit instants (exit defaults to now)
//! pw-cli charge --entry 2026-03-14T09:00:00Z --exit 2026-03-14T11:05:00Z
//! ```

use chrono::{DateTime, Utc};
use parkwise_core::billing::{self, BillingError};
use thiserror::Error;

use crate::config::{self, ConfigError};

/// Errors that can occur when computing a charge.
#[derive(Debug, Error)]
pub enum ChargeError {
    /// Rate configuration failed to load.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The billing calculator rejected the input.
    #[error(transparent)]
    Billing(#[from] BillingError),

    /// An instant argument is not valid RFC 3339.
    #[error("Invalid instant {value:?}: {source}")]
    InvalidInstant {
        /// The rejected argument.
        value: String,
        /// Parse failure detail.
        source: chrono::ParseError,
    },

    /// Neither a duration nor an entry instant was supplied.
    #[error("Either --minutes or --entry is required")]
    MissingDuration,
}

/// Compute a charge and print the itemized breakdown.
#[allow(clippy::print_stdout)]
pub fn run(
    minutes: Option<i64>,
    entry: Option<&str>,
    exit: Option<&str>,
) -> Result<(), ChargeError> {
    let rates = config::rates_from_env()?;

    let duration_minutes = match minutes {
        Some(m) => m,
        None => {
            let entry = parse_instant(entry.ok_or(ChargeError::MissingDuration)?)?;
            let exit = match exit {
                Some(raw) => parse_instant(raw)?,
                None => Utc::now(),
            };
            (exit - entry).num_minutes()
        }
    };

    tracing::debug!("Computing charge for {duration_minutes} minutes");
    let breakdown = billing::charge_breakdown(duration_minutes, &rates)?;

    println!("Duration     : {}", billing::format_duration(duration_minutes)?);
    println!("{breakdown}");
    Ok(())
}

fn parse_instant(raw: &str) -> Result<DateTime<Utc>, ChargeError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| ChargeError::InvalidInstant {
            value: raw.to_owned(),
            source,
        })
}
