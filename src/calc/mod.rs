//! Financial calculation engine
//!
//! Pure functions computing derived financial metrics from validated
//! numeric inputs. Every calculator takes a typed input struct, checks its
//! domain up front, and returns either a finite result or a [`CalcError`] —
//! `NaN` and infinity never escape this module. Rate inputs are expressed
//! as percentages ("5" means 5%) and divided by 100 internally.
//!
//! The engine holds no state and performs no I/O; currency symbols and
//! rounding for display are the caller's concern.

pub mod growth;
pub mod mortgage;
pub mod valuation;

pub use growth::{rule_of_72, CompoundInterestInput, InflationAdjustedInput, InflationAdjustedResult};
pub use mortgage::{MortgageInput, MortgageResult};
pub use valuation::{dividend_yield, pe_ratio, DcfInput};

use thiserror::Error;

use crate::error::TrackerError;

/// Domain errors for calculator inputs
///
/// Raised before any formula runs, for the input regions where the math
/// would produce a division by zero or a non-finite value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// An input was NaN or infinite
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    /// An input that must be non-negative was negative
    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    /// Compounding frequency of zero would divide by zero
    #[error("compounding frequency must be at least 1 per year")]
    ZeroCompounding,

    /// Rule of 72 is undefined at or below a zero rate
    #[error("annual rate must be greater than zero")]
    NonPositiveRate,

    /// A growth/discount rate at or below -100% makes the growth base
    /// non-positive, and fractional powers of it are undefined
    #[error("{field} must be greater than -100%")]
    RateTooLow { field: &'static str },

    /// A term of zero periods would divide by zero
    #[error("term must cover at least one period")]
    ZeroTerm,

    /// P/E is undefined for zero earnings per share
    #[error("earnings per share must not be zero")]
    ZeroEps,

    /// Dividend yield is undefined for a non-positive share price
    #[error("share price must be greater than zero")]
    NonPositiveSharePrice,
}

impl From<CalcError> for TrackerError {
    fn from(err: CalcError) -> Self {
        TrackerError::Validation(err.to_string())
    }
}

/// Reject NaN and infinities at the input boundary
pub(crate) fn check_finite(value: f64, field: &'static str) -> Result<(), CalcError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::NonFinite { field })
    }
}

/// Reject negative values for fields that are magnitudes
pub(crate) fn check_non_negative(value: f64, field: &'static str) -> Result<(), CalcError> {
    check_finite(value, field)?;
    if value < 0.0 {
        Err(CalcError::Negative { field })
    } else {
        Ok(())
    }
}

/// Reject percentage rates at or below -100%
pub(crate) fn check_rate_above_minus_100(
    value: f64,
    field: &'static str,
) -> Result<(), CalcError> {
    check_finite(value, field)?;
    if value <= -100.0 {
        Err(CalcError::RateTooLow { field })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_finite() {
        assert!(check_finite(1.5, "x").is_ok());
        assert_eq!(
            check_finite(f64::NAN, "x"),
            Err(CalcError::NonFinite { field: "x" })
        );
        assert_eq!(
            check_finite(f64::INFINITY, "x"),
            Err(CalcError::NonFinite { field: "x" })
        );
    }

    #[test]
    fn test_check_non_negative() {
        assert!(check_non_negative(0.0, "x").is_ok());
        assert_eq!(
            check_non_negative(-0.01, "x"),
            Err(CalcError::Negative { field: "x" })
        );
    }

    #[test]
    fn test_rate_floor() {
        assert!(check_rate_above_minus_100(-99.9, "rate").is_ok());
        assert_eq!(
            check_rate_above_minus_100(-100.0, "rate"),
            Err(CalcError::RateTooLow { field: "rate" })
        );
    }

    #[test]
    fn test_conversion_to_tracker_error() {
        let err: TrackerError = CalcError::ZeroEps.into();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error: earnings per share must not be zero"
        );
    }
}
