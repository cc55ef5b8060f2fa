//! Stock and cash-flow valuation calculators
//!
//! Discounted cash flow over a finite horizon, price-to-earnings ratio,
//! and dividend yield.

use super::{check_finite, check_rate_above_minus_100, CalcError};

/// Inputs for the discounted cash flow calculator
///
/// Models a growing annuity over a finite horizon: a cash flow received at
/// the end of each year, growing at a constant rate, discounted back to
/// present value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DcfInput {
    /// Cash flow received at the end of the first year
    pub cash_flow: f64,
    /// Annual discount rate as a percentage
    pub discount_rate: f64,
    /// Annual cash-flow growth rate as a percentage
    pub growth_rate: f64,
    /// Horizon in whole years, at least 1
    pub years: u32,
}

impl DcfInput {
    /// Present value: `Σ_{t=1..n} C*(1+g)^t / (1+d)^t`
    ///
    /// Accumulated year by year rather than via the closed form, which is
    /// singular at `d = g`.
    pub fn present_value(&self) -> Result<f64, CalcError> {
        check_finite(self.cash_flow, "cash flow")?;
        check_rate_above_minus_100(self.discount_rate, "discount rate")?;
        check_rate_above_minus_100(self.growth_rate, "growth rate")?;
        if self.years == 0 {
            return Err(CalcError::ZeroTerm);
        }

        let growth = 1.0 + self.growth_rate / 100.0;
        let discount = 1.0 + self.discount_rate / 100.0;

        let mut value = 0.0;
        let mut year_factor = 1.0;
        for _ in 0..self.years {
            year_factor *= growth / discount;
            value += self.cash_flow * year_factor;
        }
        Ok(value)
    }
}

/// Price-to-earnings ratio: `share_price / eps`
///
/// Undefined for zero earnings per share; that case is rejected rather
/// than returning infinity.
pub fn pe_ratio(share_price: f64, eps: f64) -> Result<f64, CalcError> {
    check_finite(share_price, "share price")?;
    check_finite(eps, "earnings per share")?;
    if eps == 0.0 {
        return Err(CalcError::ZeroEps);
    }
    Ok(share_price / eps)
}

/// Dividend yield as a percentage: `(annual_dividend / share_price) * 100`
pub fn dividend_yield(annual_dividend: f64, share_price: f64) -> Result<f64, CalcError> {
    check_finite(annual_dividend, "annual dividend")?;
    check_finite(share_price, "share price")?;
    if share_price <= 0.0 {
        return Err(CalcError::NonPositiveSharePrice);
    }
    Ok(annual_dividend / share_price * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dcf_single_year() {
        // One year out: 100 * 1.05 / 1.10
        let input = DcfInput {
            cash_flow: 100.0,
            discount_rate: 10.0,
            growth_rate: 5.0,
            years: 1,
        };
        let value = input.present_value().unwrap();
        assert!((value - 100.0 * 1.05 / 1.10).abs() < 1e-9);
    }

    #[test]
    fn test_dcf_zero_growth_matches_flat_annuity() {
        let input = DcfInput {
            cash_flow: 1000.0,
            discount_rate: 8.0,
            growth_rate: 0.0,
            years: 10,
        };
        let value = input.present_value().unwrap();

        let flat: f64 = (1..=10).map(|t| 1000.0 / 1.08_f64.powi(t)).sum();
        assert!((value - flat).abs() < 1e-6, "dcf {} vs annuity {}", value, flat);
    }

    #[test]
    fn test_dcf_equal_rates_has_no_singularity() {
        // d = g: each year's term is exactly the undiscounted cash flow
        let input = DcfInput {
            cash_flow: 500.0,
            discount_rate: 6.0,
            growth_rate: 6.0,
            years: 4,
        };
        let value = input.present_value().unwrap();
        assert!((value - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn test_dcf_rejects_zero_horizon() {
        let input = DcfInput {
            cash_flow: 100.0,
            discount_rate: 5.0,
            growth_rate: 2.0,
            years: 0,
        };
        assert_eq!(input.present_value(), Err(CalcError::ZeroTerm));
    }

    #[test]
    fn test_dcf_rejects_rate_floor() {
        let input = DcfInput {
            cash_flow: 100.0,
            discount_rate: -100.0,
            growth_rate: 0.0,
            years: 3,
        };
        assert_eq!(
            input.present_value(),
            Err(CalcError::RateTooLow {
                field: "discount rate"
            })
        );
    }

    #[test]
    fn test_pe_ratio() {
        assert_eq!(pe_ratio(150.0, 6.0).unwrap(), 25.0);
        // Negative earnings give a negative ratio, which callers may
        // render as "n/a"; only exactly-zero eps is undefined
        assert_eq!(pe_ratio(150.0, -3.0).unwrap(), -50.0);
        assert_eq!(pe_ratio(150.0, 0.0), Err(CalcError::ZeroEps));
    }

    #[test]
    fn test_dividend_yield() {
        assert_eq!(dividend_yield(2.0, 50.0).unwrap(), 4.0);
        assert_eq!(dividend_yield(0.0, 50.0).unwrap(), 0.0);
        assert_eq!(
            dividend_yield(2.0, 0.0),
            Err(CalcError::NonPositiveSharePrice)
        );
        assert_eq!(
            dividend_yield(2.0, -10.0),
            Err(CalcError::NonPositiveSharePrice)
        );
    }
}
