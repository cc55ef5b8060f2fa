//! Investment growth calculators
//!
//! Compound interest, the Rule of 72 doubling estimate, and
//! inflation-adjusted returns.

use super::{check_finite, check_non_negative, check_rate_above_minus_100, CalcError};

/// Inputs for the compound interest calculator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompoundInterestInput {
    /// Initial investment, non-negative
    pub principal: f64,
    /// Annual interest rate as a percentage ("5" = 5%)
    pub annual_rate: f64,
    /// Investment duration in years, non-negative (fractional allowed)
    pub years: f64,
    /// Compounding periods per year, at least 1
    pub compounds_per_year: u32,
}

impl CompoundInterestInput {
    /// Future value after compounding: `P * (1 + r/n)^(n*t)`
    pub fn future_value(&self) -> Result<f64, CalcError> {
        check_non_negative(self.principal, "principal")?;
        check_non_negative(self.years, "years")?;
        check_finite(self.annual_rate, "annual rate")?;
        if self.compounds_per_year == 0 {
            return Err(CalcError::ZeroCompounding);
        }

        let n = f64::from(self.compounds_per_year);
        let period_rate = self.annual_rate / 100.0 / n;
        // A per-period rate of -100% or worse has no real-valued power
        if period_rate <= -1.0 {
            return Err(CalcError::RateTooLow {
                field: "annual rate",
            });
        }

        Ok(self.principal * (1.0 + period_rate).powf(n * self.years))
    }
}

/// Rule of 72: estimated years for an investment to double at the given
/// annual percentage rate
///
/// Undefined for rates at or below zero; those are rejected rather than
/// returning infinity.
pub fn rule_of_72(annual_rate: f64) -> Result<f64, CalcError> {
    check_finite(annual_rate, "annual rate")?;
    if annual_rate <= 0.0 {
        return Err(CalcError::NonPositiveRate);
    }
    Ok(72.0 / annual_rate)
}

/// Inputs for the inflation-adjusted return calculator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InflationAdjustedInput {
    /// Invested amount, non-negative
    pub investment_amount: f64,
    /// Expected nominal annual return as a percentage
    pub expected_return: f64,
    /// Expected annual inflation as a percentage
    pub inflation_rate: f64,
    /// Horizon in years, non-negative
    pub years: f64,
}

/// Nominal and inflation-adjusted outcome of an investment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InflationAdjustedResult {
    /// Future value at the nominal return
    pub nominal: f64,
    /// Future value deflated by cumulative inflation
    pub real: f64,
    /// Purchasing power lost to inflation: `nominal - real`
    pub difference: f64,
}

impl InflationAdjustedInput {
    /// Grow the amount at the nominal rate, then deflate by inflation
    pub fn project(&self) -> Result<InflationAdjustedResult, CalcError> {
        check_non_negative(self.investment_amount, "investment amount")?;
        check_non_negative(self.years, "years")?;
        check_rate_above_minus_100(self.expected_return, "expected return")?;
        check_rate_above_minus_100(self.inflation_rate, "inflation rate")?;

        let nominal =
            self.investment_amount * (1.0 + self.expected_return / 100.0).powf(self.years);
        let real = nominal / (1.0 + self.inflation_rate / 100.0).powf(self.years);

        Ok(InflationAdjustedResult {
            nominal,
            real,
            difference: nominal - real,
        })
    }
}
