//! Financial goal model
//!
//! A savings goal with a target amount and the amount saved so far. The
//! achieved flag is stored explicitly and is independent of the derived
//! progress ratio: a goal can sit at 120% progress while the user has not
//! yet confirmed it, and can be flagged achieved early as a manual
//! override.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// A savings goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// Goal name (e.g. "Emergency Fund")
    pub name: String,

    /// Amount to save. Positive by convention; zero is tolerated and
    /// yields 0% progress rather than a division error.
    pub target_amount: Money,

    /// Amount saved so far, non-negative
    pub current_amount: Money,

    /// Explicit achieved flag, toggled by the user
    pub is_achieved: bool,

    /// When the goal was created
    pub created_at: DateTime<Utc>,

    /// When the goal was last modified
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    /// Create a new goal with nothing saved yet
    pub fn new(name: impl Into<String>, target_amount: Money) -> Self {
        Self::with_progress(name, target_amount, Money::zero())
    }

    /// Create a goal with an initial saved amount
    pub fn with_progress(
        name: impl Into<String>,
        target_amount: Money,
        current_amount: Money,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: GoalId::new(),
            name: name.into(),
            target_amount,
            current_amount,
            is_achieved: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Unclamped progress as a percentage
    ///
    /// `current / target * 100` when the target is positive, otherwise 0.
    /// Values above 100 are returned as-is; this is the ratio used for
    /// achievement eligibility.
    pub fn progress_ratio(&self) -> f64 {
        if self.target_amount.is_positive() {
            self.current_amount.cents() as f64 / self.target_amount.cents() as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Progress clamped to [0, 100], for progress-bar rendering
    pub fn display_progress(&self) -> f64 {
        self.progress_ratio().clamp(0.0, 100.0)
    }

    /// Whether the goal counts as complete: either the user flagged it
    /// achieved, or the saved amount has reached the target
    pub fn is_complete(&self) -> bool {
        self.is_achieved || self.progress_ratio() >= 100.0
    }

    /// Replace the saved amount
    pub fn set_current_amount(&mut self, amount: Money) {
        self.current_amount = amount;
        self.updated_at = Utc::now();
    }

    /// Flip the explicit achieved flag
    pub fn toggle_achieved(&mut self) {
        self.is_achieved = !self.is_achieved;
        self.updated_at = Utc::now();
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }
        if self.target_amount.is_negative() {
            return Err(GoalValidationError::NegativeTarget {
                target: self.target_amount,
            });
        }
        if self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeCurrent {
                current: self.current_amount,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} / {} ({:.1}%)",
            self.name,
            self.current_amount,
            self.target_amount,
            self.display_progress()
        )
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NegativeTarget { target: Money },
    NegativeCurrent { current: Money },
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name must not be empty"),
            Self::NegativeTarget { target } => {
                write!(f, "Goal target must not be negative (got {})", target)
            }
            Self::NegativeCurrent { current } => {
                write!(f, "Goal saved amount must not be negative (got {})", current)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}
