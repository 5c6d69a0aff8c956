//! Rate configuration for charge computation.

use serde::{Deserialize, Serialize};

use super::money::{CurrencyCode, Money};

/// Errors that can occur when constructing a [`RateConfig`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum RateConfigError {
    /// The hourly rate is zero or negative.
    #[error("hourly rate must be positive, got {0}")]
    NonPositiveRate(Money),
    /// The daily cap is zero or negative.
    #[error("daily cap must be positive, got {0}")]
    NonPositiveCap(Money),
    /// Rate and cap are denominated in different currencies.
    #[error("hourly rate is in {rate} but daily cap is in {cap}")]
    CurrencyMismatch {
        /// Currency of the hourly rate.
        rate: CurrencyCode,
        /// Currency of the daily cap.
        cap: CurrencyCode,
    },
}

/// Admin-configured pricing for a parking facility.
///
/// An explicit, immutable value passed into the billing functions. Rate
/// changes take effect for all charges computed after the change; there is no
/// historical versioning, so callers re-read the configuration at
/// charge-computation time.
///
/// ## Constraints
///
/// - `hourly_rate` and `daily_cap` are strictly positive
/// - Both are denominated in the same currency
///
/// ## Examples
///
/// ```
/// use parkwise_core::{CurrencyCode, Money, RateConfig};
/// use rust_decimal::dec;
///
/// let rates = RateConfig::new(
///     Money::new(dec!(20), CurrencyCode::INR),
///     Money::new(dec!(200), CurrencyCode::INR),
/// )
/// .expect("valid rates");
/// assert_eq!(rates.currency(), CurrencyCode::INR);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateConfig {
    hourly_rate: Money,
    daily_cap: Money,
}

impl RateConfig {
    /// Create a validated rate configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if either amount is zero or negative, or if the two
    /// amounts are in different currencies.
    pub fn new(hourly_rate: Money, daily_cap: Money) -> Result<Self, RateConfigError> {
        if !hourly_rate.is_positive() {
            return Err(RateConfigError::NonPositiveRate(hourly_rate));
        }
        if !daily_cap.is_positive() {
            return Err(RateConfigError::NonPositiveCap(daily_cap));
        }
        if hourly_rate.currency != daily_cap.currency {
            return Err(RateConfigError::CurrencyMismatch {
                rate: hourly_rate.currency,
                cap: daily_cap.currency,
            });
        }
        Ok(Self {
            hourly_rate,
            daily_cap,
        })
    }

    /// Price per started hour of parking.
    #[must_use]
    pub const fn hourly_rate(&self) -> Money {
        self.hourly_rate
    }

    /// Maximum amount chargeable for a single session.
    #[must_use]
    pub const fn daily_cap(&self) -> Money {
        self.daily_cap
    }

    /// Currency both amounts are denominated in.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.hourly_rate.currency
    }
}
