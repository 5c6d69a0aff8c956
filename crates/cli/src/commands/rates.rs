//! Rate configuration inspection command.

use parkwise_core::billing::GRACE_PERIOD_MINUTES;

use crate::config::{self, ConfigError};

/// Print the effective rate configuration.
#[allow(clippy::print_stdout)]
pub fn show() -> Result<(), ConfigError> {
    let rates = config::rates_from_env()?;

    println!("Currency     : {}", rates.currency());
    println!("Hourly rate  : {}", rates.hourly_rate());
    println!("Daily cap    : {}", rates.daily_cap());
    println!("Grace period : first {GRACE_PERIOD_MINUTES} minutes free");
    Ok(())
}
