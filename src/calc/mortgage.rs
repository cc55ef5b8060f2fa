//! Mortgage payment calculator
//!
//! Standard amortization: fixed monthly payment over the loan term, with
//! the zero-rate loan special-cased to a straight division.

use super::{check_finite, check_non_negative, CalcError};

/// Inputs for the mortgage calculator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MortgageInput {
    /// Loan amount, non-negative
    pub principal: f64,
    /// Annual interest rate as a percentage ("4" = 4%)
    pub annual_rate: f64,
    /// Loan term in whole years, at least 1
    pub years: u32,
}

/// Result of a mortgage computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MortgageResult {
    /// Fixed monthly payment
    pub monthly: f64,
    /// Total paid over the life of the loan: `monthly * payments`
    pub total: f64,
    /// Total interest paid: `total - principal`
    pub interest: f64,
    /// Number of monthly payments
    pub payments: u32,
}

impl MortgageInput {
    /// Compute the amortized monthly payment and totals
    ///
    /// `monthly = P*i*(1+i)^m / ((1+i)^m - 1)` with `i` the monthly rate
    /// and `m` the number of payments. A zero rate reduces to
    /// `monthly = P / m`.
    pub fn amortize(&self) -> Result<MortgageResult, CalcError> {
        check_non_negative(self.principal, "principal")?;
        check_finite(self.annual_rate, "annual rate")?;
        if self.annual_rate < 0.0 {
            return Err(CalcError::Negative {
                field: "annual rate",
            });
        }
        if self.years == 0 {
            return Err(CalcError::ZeroTerm);
        }

        let payments = self.years * 12;
        let m = f64::from(payments);
        let monthly_rate = self.annual_rate / 100.0 / 12.0;

        let monthly = if monthly_rate == 0.0 {
            // Zero-rate loan: the amortization formula divides by zero
            self.principal / m
        } else {
            let growth = (1.0 + monthly_rate).powf(m);
            self.principal * monthly_rate * growth / (growth - 1.0)
        };

        let total = monthly * m;
        Ok(MortgageResult {
            monthly,
            total,
            interest: total - self.principal,
            payments,
        })
    }
}
