//! Service layer for WealthTracker
//!
//! The service layer provides validation and construction logic on top of
//! the models. Services take the collections they operate on as
//! parameters; there is no ambient store handle.

pub mod goal;
pub mod quote;
pub mod transaction;

pub use goal::GoalService;
pub use quote::QuoteService;
pub use transaction::{TransactionDraft, TransactionService};
