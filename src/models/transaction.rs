//! Money-flow transaction model
//!
//! Represents a single income or expense record. Transactions are treated
//! as an immutable snapshot by the aggregation code: reports read a slice
//! and never mutate it.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a money-flow record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in (salary, dividends, ...)
    Income,
    /// Money going out (rent, food, ...)
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A single income or expense record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Amount, always non-negative; the kind carries the direction
    pub amount: Money,

    /// Category name (e.g. "Salary", "Food")
    pub category: String,

    /// Transaction date
    pub date: NaiveDate,

    /// Optional free-form note
    #[serde(default)]
    pub description: Option<String>,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            category: category.into(),
            date,
            description: None,
            created_at: Utc::now(),
        }
    }

    /// Create a transaction with a description attached
    pub fn with_description(
        kind: TransactionKind,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        let mut txn = Self::new(kind, amount, category, date);
        txn.description = Some(description.into());
        txn
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Check whether this transaction falls in the given calendar month
    pub fn in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount {
                amount: self.amount,
            });
        }
        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_income() { "+" } else { "-" };
        write!(
            f,
            "{} {} {} {}{}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            sign,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount { amount: Money },
    EmptyCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount { amount } => {
                write!(f, "Transaction amount must not be negative (got {})", amount)
            }
            Self::EmptyCategory => write!(f, "Transaction category must not be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
