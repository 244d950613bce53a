//! Single test binary entry point.
//!
//! All integration tests compile into one executable.
//!
//! Structure:
//! - helpers: Builders and fixtures
//! - integration: Multi-component workflow tests
//! - unit: Single-component unit tests

mod helpers;
mod integration;
mod unit;
