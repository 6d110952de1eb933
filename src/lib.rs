//! Freight Calculator library
//!
//! This module exposes the core functionality for use in tests
//! and as a library.

pub mod cli;
pub mod core;
pub mod export;
pub mod geocode;
pub mod i18n;
pub mod ledger;
pub mod pricing;
pub mod trip;
