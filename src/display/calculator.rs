//! Calculator result formatting
//!
//! Precision is contextual: monetary results render with 2 decimals and a
//! caller-supplied symbol, the Rule of 72 with 1 decimal, P/E with an "x"
//! suffix, and yields with a "%" suffix.

use crate::calc::{InflationAdjustedResult, MortgageResult};
use crate::models::Money;

/// Format a monetary calculator result: symbol, thousands separators, two
/// decimals
pub fn format_currency(value: f64, symbol: &str) -> String {
    Money::from_major(value).format_with_symbol(symbol)
}

/// Format a Rule of 72 estimate, e.g. "9.0 years"
pub fn format_years(years: f64) -> String {
    format!("{:.1} years", years)
}

/// Format a P/E ratio, e.g. "25.00x"
pub fn format_pe(ratio: f64) -> String {
    format!("{:.2}x", ratio)
}

/// Format a dividend yield, e.g. "4.00%"
pub fn format_yield(percent: f64) -> String {
    format!("{:.2}%", percent)
}

/// Format a mortgage result as the three lines the calculator card shows
pub fn format_mortgage(result: &MortgageResult, symbol: &str) -> String {
    format!(
        "Monthly Payment: {}\nTotal Amount Paid: {}\nTotal Interest: {}\n",
        format_currency(result.monthly, symbol),
        format_currency(result.total, symbol),
        format_currency(result.interest, symbol)
    )
}

/// Format an inflation-adjusted projection
pub fn format_inflation_adjusted(result: &InflationAdjustedResult, symbol: &str) -> String {
    format!(
        "Nominal Value: {}\nInflation-Adjusted Value: {}\nPurchasing Power Lost: {}\n",
        format_currency(result.nominal, symbol),
        format_currency(result.real, symbol),
        format_currency(result.difference, symbol)
    )
}
