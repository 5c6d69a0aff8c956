//! Parkwise Core - Parking domain library.
//!
//! This crate provides the domain types and billing logic used across all
//! Parkwise components:
//!
//! - `cli` - Command-line tools for computing charges and inspecting rates
//! - `integration-tests` - Cross-crate contract tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP clients. Callers derive a parking duration from stored
//! entry/exit instants and pass it, together with a [`RateConfig`], into the
//! [`billing`] functions.
//!
//! # Modules
//!
//! - [`types`] - Money, rate configuration, parking sessions, and type-safe IDs
//! - [`billing`] - Charge computation under the grace-period + hourly-rate +
//!   daily-cap policy

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod billing;
pub mod types;

pub use billing::{BillingError, ChargeBreakdown};
pub use types::*;
