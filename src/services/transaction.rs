//! Transaction service
//!
//! Boundary layer turning raw user input into validated transactions. The
//! service takes the category catalog it validates against as a parameter;
//! persistence of the resulting records stays with the caller.

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{CategoryCatalog, Money, Transaction, TransactionKind};

/// Typed input for a new transaction, assembled at the form boundary
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    /// Income or expense
    pub kind: TransactionKind,
    /// Non-negative amount
    pub amount: Money,
    /// Category name; must be active for the matching kind
    pub category: String,
    /// Transaction date
    pub date: NaiveDate,
    /// Optional note
    pub description: Option<String>,
}

/// Service for creating and listing transactions
pub struct TransactionService<'a> {
    catalog: &'a CategoryCatalog,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service over a category catalog
    pub fn new(catalog: &'a CategoryCatalog) -> Self {
        Self { catalog }
    }

    /// Validate a draft and build the transaction
    pub fn create(&self, draft: TransactionDraft) -> TrackerResult<Transaction> {
        if !self.catalog.contains(&draft.category, draft.kind) {
            return Err(TrackerError::category_not_found(draft.category));
        }

        let mut txn = Transaction::new(draft.kind, draft.amount, draft.category, draft.date);
        txn.description = draft.description.filter(|d| !d.trim().is_empty());
        txn.validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;
        Ok(txn)
    }

    /// The most recent transactions, newest date first
    ///
    /// Ties on the date fall back to creation time, so records entered the
    /// same day list newest-entry first.
    pub fn recent(&self, transactions: &'a [Transaction], limit: usize) -> Vec<&'a Transaction> {
        let mut sorted: Vec<&Transaction> = transactions.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        sorted.truncate(limit);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn draft(kind: TransactionKind, category: &str, cents: i64) -> TransactionDraft {
        TransactionDraft {
            kind,
            amount: Money::from_cents(cents),
            category: category.to_string(),
            date: date(2025, 6, 10),
            description: None,
        }
    }

    #[test]
    fn test_create_valid_transaction() {
        let catalog = CategoryCatalog::with_defaults();
        let service = TransactionService::new(&catalog);

        let txn = service
            .create(draft(TransactionKind::Income, "Salary", 500000))
            .unwrap();
        assert!(txn.is_income());
        assert_eq!(txn.amount.cents(), 500000);
    }

    #[test]
    fn test_create_rejects_unknown_category() {
        let catalog = CategoryCatalog::with_defaults();
        let service = TransactionService::new(&catalog);

        let err = service
            .create(draft(TransactionKind::Expense, "Lottery", 100))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_create_rejects_kind_mismatch() {
        let catalog = CategoryCatalog::with_defaults();
        let service = TransactionService::new(&catalog);

        // "Salary" exists, but only as an income category
        let err = service
            .create(draft(TransactionKind::Expense, "Salary", 100))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_create_rejects_negative_amount() {
        let catalog = CategoryCatalog::with_defaults();
        let service = TransactionService::new(&catalog);

        let err = service
            .create(draft(TransactionKind::Expense, "Food", -100))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_create_drops_blank_description() {
        let catalog = CategoryCatalog::with_defaults();
        let service = TransactionService::new(&catalog);

        let mut d = draft(TransactionKind::Expense, "Food", 100);
        d.description = Some("   ".to_string());
        let txn = service.create(d).unwrap();
        assert!(txn.description.is_none());

        let mut d = draft(TransactionKind::Expense, "Food", 100);
        d.description = Some("groceries".to_string());
        let txn = service.create(d).unwrap();
        assert_eq!(txn.description.as_deref(), Some("groceries"));
    }

    #[test]
    fn test_recent_sorts_newest_first() {
        let catalog = CategoryCatalog::with_defaults();
        let service = TransactionService::new(&catalog);

        let mut old = draft(TransactionKind::Expense, "Food", 100);
        old.date = date(2025, 1, 1);
        let mut newer = draft(TransactionKind::Expense, "Rent", 200);
        newer.date = date(2025, 5, 1);

        let transactions = vec![
            service.create(old).unwrap(),
            service.create(newer).unwrap(),
        ];
        let recent = service.recent(&transactions, 10);
        assert_eq!(recent[0].category, "Rent");
        assert_eq!(recent[1].category, "Food");

        let limited = service.recent(&transactions, 1);
        assert_eq!(limited.len(), 1);
    }
}
