//! Goal service
//!
//! Validation and state transitions for savings goals. Goals are passed in
//! by the caller; the service never reaches into a store.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Goal, Money};

/// Service for goal management
pub struct GoalService;

impl GoalService {
    /// Validate inputs and build a new goal
    ///
    /// The creation boundary requires a positive target; pre-existing
    /// zero-target goals are still tolerated by the progress math.
    pub fn create(
        name: impl Into<String>,
        target_amount: Money,
        current_amount: Option<Money>,
    ) -> TrackerResult<Goal> {
        if !target_amount.is_positive() {
            return Err(TrackerError::Validation(
                "Goal target must be greater than zero".to_string(),
            ));
        }

        let goal = Goal::with_progress(
            name,
            target_amount,
            current_amount.unwrap_or_else(Money::zero),
        );
        goal.validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;
        Ok(goal)
    }

    /// Replace a goal's saved amount
    pub fn update_progress(goal: &mut Goal, new_amount: Money) -> TrackerResult<()> {
        if new_amount.is_negative() {
            return Err(TrackerError::Validation(
                "Goal saved amount must not be negative".to_string(),
            ));
        }
        goal.set_current_amount(new_amount);
        Ok(())
    }

    /// Flip a goal's achieved flag
    pub fn toggle_achieved(goal: &mut Goal) {
        goal.toggle_achieved();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults_current_to_zero() {
        let goal = GoalService::create("Emergency Fund", Money::from_cents(500000), None).unwrap();
        assert_eq!(goal.current_amount, Money::zero());
        assert!(!goal.is_achieved);
    }

    #[test]
    fn test_create_with_initial_progress() {
        let goal = GoalService::create(
            "Car",
            Money::from_cents(100000),
            Some(Money::from_cents(40000)),
        )
        .unwrap();
        assert_eq!(goal.progress_ratio(), 40.0);
    }

    #[test]
    fn test_create_rejects_non_positive_target() {
        assert!(GoalService::create("X", Money::zero(), None).is_err());
        assert!(GoalService::create("X", Money::from_cents(-100), None).is_err());
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let err = GoalService::create("  ", Money::from_cents(100), None).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_create_rejects_negative_initial_progress() {
        let err = GoalService::create("X", Money::from_cents(100), Some(Money::from_cents(-1)))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_update_progress() {
        let mut goal = GoalService::create("Trip", Money::from_cents(100000), None).unwrap();
        GoalService::update_progress(&mut goal, Money::from_cents(120000)).unwrap();
        assert_eq!(goal.progress_ratio(), 120.0);

        let err = GoalService::update_progress(&mut goal, Money::from_cents(-1)).unwrap_err();
        assert!(err.is_validation());
        // failed update leaves the amount untouched
        assert_eq!(goal.current_amount.cents(), 120000);
    }

    #[test]
    fn test_toggle_achieved() {
        let mut goal = GoalService::create("Trip", Money::from_cents(100), None).unwrap();
        GoalService::toggle_achieved(&mut goal);
        assert!(goal.is_achieved);
        GoalService::toggle_achieved(&mut goal);
        assert!(!goal.is_achieved);
    }
}
