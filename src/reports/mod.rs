//! Aggregation reports
//!
//! Summary computations over transaction and goal snapshots. Reports are
//! pure: they take the collections as parameters, recompute from scratch
//! on every call, and leave currency symbols to the caller.

pub mod goals;
pub mod money_flow;
pub mod overview;

pub use goals::{GoalProgress, GoalProgressReport};
pub use money_flow::{top_spending_category, CategorySpending, MoneyFlowSummary, NO_EXPENSES};
pub use overview::{DashboardOverview, SavingsAssessment};
