//! Integration tests for Parkwise.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p parkwise-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `billing_contract` - The billing calculator's public contract: worked
//!   pricing scenarios, invariants, and the session-to-charge flow
//!
//! The tests live in `tests/` and exercise only the public API of
//! `parkwise-core`, the same surface the CLI and any future display layer
//! consume.
