//! Core data models for WealthTracker
//!
//! This module contains the data structures the engine operates on:
//! money-flow transactions, savings goals, categories, quotes, and the
//! currency table.

pub mod category;
pub mod country;
pub mod goal;
pub mod ids;
pub mod money;
pub mod quote;
pub mod transaction;

pub use category::{Category, CategoryCatalog, DEFAULT_EXPENSE_CATEGORIES, DEFAULT_INCOME_CATEGORIES};
pub use country::{currency_symbol, find_country, Country, COUNTRIES};
pub use goal::Goal;
pub use ids::{CategoryId, GoalId, QuoteId, TransactionId};
pub use money::Money;
pub use quote::Quote;
pub use transaction::{Transaction, TransactionKind};
