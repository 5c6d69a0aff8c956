//! Charge computation for parking sessions.
//!
//! Pricing policy, applied in order:
//!
//! 1. **Grace period** - a stay of at most [`GRACE_PERIOD_MINUTES`] minutes is
//!    free of charge.
//! 2. **Hour rounding** - any started hour is billed as a full hour.
//! 3. **Base charge** - hours charged times the hourly rate.
//! 4. **Daily cap** - the final charge never exceeds the configured cap.
//!
//! Every function here is a pure computation over its inputs; rate changes
//! take effect simply because callers pass the current [`RateConfig`] on each
//! call.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Money, RateConfig};

/// Stays of at most this many minutes incur no charge.
pub const GRACE_PERIOD_MINUTES: i64 = 5;

const MINUTES_PER_HOUR: i64 = 60;

/// Errors that can occur when computing a charge.
#[derive(thiserror::Error, Debug, Clone)]
pub enum BillingError {
    /// The supplied duration is negative. Durations are derived from
    /// entry/exit instants; a negative value means the caller's clock data is
    /// corrupt, so it is rejected rather than billed.
    #[error("parking duration cannot be negative, got {minutes} minutes")]
    NegativeDuration {
        /// The rejected duration.
        minutes: i64,
    },
}

/// Itemized result of a charge computation.
///
/// Derived from a `(duration, rates)` pair and never persisted - displays
/// recompute it on demand. The `Display` impl renders a receipt-style block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeBreakdown {
    /// True if the stay fell within the grace period.
    pub grace_period_used: bool,
    /// Duration minutes remaining after grace-period exclusion.
    pub chargeable_minutes: i64,
    /// Chargeable minutes rounded up to whole hours.
    pub hours_charged: i64,
    /// The hourly rate the charge was computed with.
    pub hourly_rate: Money,
    /// Uncapped charge: hours charged times the hourly rate.
    pub base_charge: Money,
    /// Amount to bill, after applying the daily cap.
    pub final_charge: Money,
    /// True if the base charge strictly exceeded the daily cap.
    pub daily_cap_applied: bool,
    /// Base charge minus final charge when the cap applied, else zero.
    pub saved_amount: Money,
}

/// Compute the amount to bill for a stay of `duration_minutes`.
///
/// The result is guaranteed to be at most `rates.daily_cap()`.
///
/// # Errors
///
/// Returns [`BillingError::NegativeDuration`] if `duration_minutes` is
/// negative.
pub fn compute_charge(
    duration_minutes: i64,
    rates: &RateConfig,
) -> Result<Money, BillingError> {
    Ok(charge_breakdown(duration_minutes, rates)?.final_charge)
}

/// Compute the full itemized breakdown for a stay of `duration_minutes`.
///
/// # Errors
///
/// Returns [`BillingError::NegativeDuration`] if `duration_minutes` is
/// negative.
pub fn charge_breakdown(
    duration_minutes: i64,
    rates: &RateConfig,
) -> Result<ChargeBreakdown, BillingError> {
    if duration_minutes < 0 {
        return Err(BillingError::NegativeDuration {
            minutes: duration_minutes,
        });
    }

    let currency = rates.currency();
    let grace_period_used = duration_minutes <= GRACE_PERIOD_MINUTES;
    let chargeable_minutes = if grace_period_used { 0 } else { duration_minutes };
    // i64::div_ceil is unstable (int_roundings); chargeable_minutes is >= 0 here,
    // so the manual ceiling division is equivalent.
    let hours_charged = (chargeable_minutes + MINUTES_PER_HOUR - 1) / MINUTES_PER_HOUR;

    let base_charge = Money::new(
        Decimal::from(hours_charged) * rates.hourly_rate().amount,
        currency,
    );
    let cap = rates.daily_cap();
    // Strict comparison: a base charge exactly at the cap is not "capped"
    let daily_cap_applied = base_charge.amount > cap.amount;
    let final_charge = base_charge.min(cap);
    let saved_amount = base_charge.saturating_sub(cap);

    Ok(ChargeBreakdown {
        grace_period_used,
        chargeable_minutes,
        hours_charged,
        hourly_rate: rates.hourly_rate(),
        base_charge,
        final_charge,
        daily_cap_applied,
        saved_amount,
    })
}

/// Render a duration for display: `"2h 5m"` when hours are present,
/// otherwise `"45m"`.
///
/// Downstream displays depend on this exact format.
///
/// # Errors
///
/// Returns [`BillingError::NegativeDuration`] if `duration_minutes` is
/// negative.
pub fn format_duration(duration_minutes: i64) -> Result<String, BillingError> {
    if duration_minutes < 0 {
        return Err(BillingError::NegativeDuration {
            minutes: duration_minutes,
        });
    }
    Ok(render_minutes(duration_minutes))
}

fn render_minutes(minutes: i64) -> String {
    let hours = minutes / MINUTES_PER_HOUR;
    let rem = minutes % MINUTES_PER_HOUR;
    if hours > 0 {
        format!("{hours}h {rem}m")
    } else {
        format!("{rem}m")
    }
}

impl fmt::Display for ChargeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.grace_period_used {
            writeln!(
                f,
                "Grace period : exited within {GRACE_PERIOD_MINUTES} minutes, no charge"
            )?;
        } else {
            writeln!(f, "Time parked  : {}", render_minutes(self.chargeable_minutes))?;
            writeln!(
                f,
                "Hours billed : {} @ {}/h",
                self.hours_charged, self.hourly_rate
            )?;
            writeln!(f, "Base charge  : {}", self.base_charge)?;
            if self.daily_cap_applied {
                writeln!(f, "Daily cap    : applied, saved {}", self.saved_amount)?;
            }
        }
        write!(f, "Total due    : {}", self.final_charge)
    }
}
