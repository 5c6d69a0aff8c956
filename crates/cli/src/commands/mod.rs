//! CLI command implementations.

pub mod charge;
pub mod rates;
