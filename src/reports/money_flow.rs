//! Money-flow summary report
//!
//! Reduces a transaction snapshot into the dashboard's headline numbers:
//! totals by direction, net savings, savings rate, and the current month's
//! top spending category. Everything is recomputed from the full snapshot
//! on each call; nothing is cached.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Transaction};

/// Sentinel category reported when a month has no expenses
pub const NO_EXPENSES: &str = "No expenses";

/// Headline totals over a transaction snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoneyFlowSummary {
    /// Sum of all income amounts
    pub total_income: Money,
    /// Sum of all expense amounts
    pub total_expenses: Money,
    /// Income minus expenses (negative when overspent)
    pub net_savings: Money,
    /// Net savings as a percentage of income; 0 when there is no income
    pub savings_rate: f64,
}

impl MoneyFlowSummary {
    /// Compute the summary over a snapshot
    pub fn generate(transactions: &[Transaction]) -> Self {
        let total_income: Money = transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum();
        let total_expenses: Money = transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum();
        let net_savings = total_income - total_expenses;

        // Guard the zero-income case so the rate is 0, never NaN
        let savings_rate = if total_income.is_positive() {
            net_savings.cents() as f64 / total_income.cents() as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total_income,
            total_expenses,
            net_savings,
            savings_rate,
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();
        output.push_str("Money Flow Summary\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "Total Income:   {:>15}\n",
            self.total_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Total Expenses: {:>15}\n",
            self.total_expenses.format_with_symbol(symbol)
        ));
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "Net Savings:    {:>15}\n",
            self.net_savings.format_with_symbol(symbol)
        ));
        output.push_str(&format!("Savings Rate:   {:>14.1}%\n", self.savings_rate));
        output
    }

    /// Export the summary to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TrackerResult<()> {
        writeln!(writer, "Total Income,Total Expenses,Net Savings,Savings Rate")
            .map_err(|e| TrackerError::Export(e.to_string()))?;
        writeln!(
            writer,
            "{:.2},{:.2},{:.2},{:.2}",
            self.total_income.as_major(),
            self.total_expenses.as_major(),
            self.net_savings.as_major(),
            self.savings_rate
        )
        .map_err(|e| TrackerError::Export(e.to_string()))?;
        Ok(())
    }
}

/// Spending total for a single category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpending {
    /// Category name, or [`NO_EXPENSES`] when the month had none
    pub category: String,
    /// Summed expense amount
    pub amount: Money,
}

impl CategorySpending {
    /// The sentinel value for a month without expenses
    pub fn none() -> Self {
        Self {
            category: NO_EXPENSES.to_string(),
            amount: Money::zero(),
        }
    }
}

/// The expense category with the largest summed amount in the given
/// calendar month
///
/// Only transactions whose date falls in `(year, month)` of the supplied
/// reference date are considered; the caller passes "today" so the
/// computation stays deterministic and testable. Categories accumulate in
/// first-encountered transaction order and the selection scan keeps the
/// earlier category on equal totals.
pub fn top_spending_category(transactions: &[Transaction], today: NaiveDate) -> CategorySpending {
    use chrono::Datelike;

    let year = today.year();
    let month = today.month();

    // Insertion-ordered accumulation keeps the tie-break deterministic
    let mut totals: Vec<(String, Money)> = Vec::new();
    for txn in transactions {
        if !txn.is_expense() || !txn.in_month(year, month) {
            continue;
        }
        match totals.iter_mut().find(|(name, _)| *name == txn.category) {
            Some((_, amount)) => *amount += txn.amount,
            None => totals.push((txn.category.clone(), txn.amount)),
        }
    }

    let mut top = CategorySpending::none();
    for (category, amount) in totals {
        if amount > top.amount {
            top = CategorySpending { category, amount };
        }
    }
    top
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn income(cents: i64, day: u32) -> Transaction {
        Transaction::new(
            TransactionKind::Income,
            Money::from_cents(cents),
            "Salary",
            date(2025, 6, day),
        )
    }

    fn expense(cents: i64, category: &str, day: u32) -> Transaction {
        Transaction::new(
            TransactionKind::Expense,
            Money::from_cents(cents),
            category,
            date(2025, 6, day),
        )
    }

    #[test]
    fn test_summary_reference_case() {
        // income 5000, expenses 2000 + 500
        let transactions = vec![
            income(500000, 1),
            expense(200000, "Rent", 5),
            expense(50000, "Food", 12),
        ];
        let summary = MoneyFlowSummary::generate(&transactions);
        assert_eq!(summary.total_income.cents(), 500000);
        assert_eq!(summary.total_expenses.cents(), 250000);
        assert_eq!(summary.net_savings.cents(), 250000);
        assert_eq!(summary.savings_rate, 50.0);
    }

    #[test]
    fn test_summary_empty_snapshot_is_all_zeros() {
        let summary = MoneyFlowSummary::generate(&[]);
        assert_eq!(summary.total_income, Money::zero());
        assert_eq!(summary.total_expenses, Money::zero());
        assert_eq!(summary.net_savings, Money::zero());
        assert_eq!(summary.savings_rate, 0.0);
    }

    #[test]
    fn test_savings_rate_zero_without_income() {
        // expenses but no income must not divide by zero
        let transactions = vec![expense(10000, "Food", 3)];
        let summary = MoneyFlowSummary::generate(&transactions);
        assert_eq!(summary.savings_rate, 0.0);
        assert_eq!(summary.net_savings.cents(), -10000);
    }

    #[test]
    fn test_net_identity_holds() {
        let transactions = vec![
            income(123456, 1),
            income(7890, 2),
            expense(99999, "Travel", 3),
        ];
        let summary = MoneyFlowSummary::generate(&transactions);
        assert_eq!(
            summary.net_savings,
            summary.total_income - summary.total_expenses
        );
    }

    #[test]
    fn test_negative_savings_rate_when_overspent() {
        let transactions = vec![income(100000, 1), expense(150000, "Rent", 2)];
        let summary = MoneyFlowSummary::generate(&transactions);
        assert_eq!(summary.savings_rate, -50.0);
    }

    #[test]
    fn test_top_category_picks_largest_monthly_total() {
        let transactions = vec![
            income(500000, 1),
            expense(30000, "Food", 2),
            expense(80000, "Rent", 3),
            expense(25000, "Food", 20),
        ];
        let top = top_spending_category(&transactions, date(2025, 6, 15));
        assert_eq!(top.category, "Rent");
        assert_eq!(top.amount.cents(), 80000);
    }

    #[test]
    fn test_top_category_ignores_other_months() {
        let mut transactions = vec![expense(10000, "Food", 5)];
        transactions.push(Transaction::new(
            TransactionKind::Expense,
            Money::from_cents(999999),
            "Travel",
            date(2025, 5, 31),
        ));
        transactions.push(Transaction::new(
            TransactionKind::Expense,
            Money::from_cents(999999),
            "Travel",
            date(2024, 6, 5),
        ));
        let top = top_spending_category(&transactions, date(2025, 6, 15));
        assert_eq!(top.category, "Food");
    }

    #[test]
    fn test_top_category_no_expenses_sentinel() {
        let transactions = vec![income(500000, 1)];
        let top = top_spending_category(&transactions, date(2025, 6, 15));
        assert_eq!(top.category, NO_EXPENSES);
        assert_eq!(top.amount, Money::zero());

        let top = top_spending_category(&[], date(2025, 6, 15));
        assert_eq!(top, CategorySpending::none());
    }

    #[test]
    fn test_top_category_tie_keeps_first_encountered() {
        let transactions = vec![
            expense(40000, "Utilities", 2),
            expense(40000, "Healthcare", 3),
        ];
        let top = top_spending_category(&transactions, date(2025, 6, 15));
        assert_eq!(top.category, "Utilities");
    }

    #[test]
    fn test_format_terminal() {
        let transactions = vec![income(500000, 1), expense(250000, "Rent", 2)];
        let summary = MoneyFlowSummary::generate(&transactions);
        let rendered = summary.format_terminal("Rs");
        assert!(rendered.contains("Rs5,000.00"));
        assert!(rendered.contains("50.0%"));
    }

    #[test]
    fn test_export_csv() {
        let summary = MoneyFlowSummary::generate(&[income(500000, 1)]);
        let mut buffer = Vec::new();
        summary.export_csv(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        assert!(csv.contains("Total Income,Total Expenses"));
        assert!(csv.contains("5000.00,0.00,5000.00,100.00"));
    }
}
