//! Core types for Parkwise.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod rate;
pub mod session;

pub use id::*;
pub use money::{CurrencyCode, Money};
pub use rate::{RateConfig, RateConfigError};
pub use session::{ParkingSession, SessionError};
