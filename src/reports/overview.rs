//! Dashboard overview
//!
//! Composes the money-flow summary, the current month's top spending
//! category, and the goal headline into the numbers the dashboard renders
//! in its overview cards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::goals::GoalProgressReport;
use super::money_flow::{top_spending_category, CategorySpending, MoneyFlowSummary};
use crate::models::{Goal, Transaction};

/// Qualitative savings-rate band shown under the rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SavingsAssessment {
    /// 20% or more
    Excellent,
    /// 10% to 20%
    Good,
    /// Below 10%
    NeedsImprovement,
}

impl SavingsAssessment {
    /// Classify a savings rate percentage
    pub fn from_rate(rate: f64) -> Self {
        if rate >= 20.0 {
            Self::Excellent
        } else if rate >= 10.0 {
            Self::Good
        } else {
            Self::NeedsImprovement
        }
    }

    /// The dashboard's label for this band
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent!",
            Self::Good => "Good",
            Self::NeedsImprovement => "Needs improvement",
        }
    }
}

/// Everything the dashboard overview cards need, derived in one pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverview {
    /// Income/expense totals and savings rate
    pub summary: MoneyFlowSummary,
    /// Savings-rate band
    pub assessment: SavingsAssessment,
    /// Top spending category for the reference month
    pub top_spending: CategorySpending,
    /// Goal progress headline and rows
    pub goals: GoalProgressReport,
}

impl DashboardOverview {
    /// Compute the overview from snapshots
    ///
    /// `today` supplies the reference month for the top-spending card.
    pub fn generate(transactions: &[Transaction], goals: &[Goal], today: NaiveDate) -> Self {
        let summary = MoneyFlowSummary::generate(transactions);
        let assessment = SavingsAssessment::from_rate(summary.savings_rate);
        Self {
            assessment,
            top_spending: top_spending_category(transactions, today),
            goals: GoalProgressReport::generate(goals),
            summary,
        }
    }

    /// Format the overview for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = self.summary.format_terminal(symbol);
        output.push_str(&format!("Assessment:     {:>15}\n", self.assessment.label()));
        output.push_str(&format!(
            "Top Spending:   {} ({})\n",
            self.top_spending.category,
            self.top_spending.amount.format_with_symbol(symbol)
        ));
        output.push_str(&format!("Goals achieved: {:>15}\n", self.goals.headline()));
        output
    }
}
