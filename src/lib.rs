//! WealthTracker core - calculation and aggregation engine
//!
//! This library provides the numeric core of the WealthTracker
//! personal-finance application: the financial calculators (compound
//! interest, Rule of 72, mortgage amortization, DCF, P/E, dividend yield,
//! inflation-adjusted returns) and the aggregation logic behind the
//! dashboard (money-flow totals, savings rate, top spending category,
//! goal progress).
//!
//! The application shell - web UI, authentication, and the remote
//! database - lives outside this crate. Callers fetch transaction and
//! goal snapshots, hand them to the functions here, and render the plain
//! results that come back. All computations are synchronous, side-effect
//! free, and recomputed from the full snapshot on every call.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths and user settings (country, date format)
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, goals, categories, quotes)
//! - `calc`: Pure financial calculators
//! - `reports`: Aggregation over transaction/goal snapshots
//! - `services`: Input validation and state transitions
//! - `display`: Result formatting with injected currency symbols
//!
//! # Example
//!
//! ```rust
//! use wealthtracker::calc::CompoundInterestInput;
//!
//! let fv = CompoundInterestInput {
//!     principal: 10000.0,
//!     annual_rate: 5.0,
//!     years: 10.0,
//!     compounds_per_year: 12,
//! }
//! .future_value()
//! .unwrap();
//! assert!((fv - 16470.09).abs() < 0.01);
//! ```

pub mod calc;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{TrackerError, TrackerResult};
