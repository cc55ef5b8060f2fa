//! Display formatting for calculator and report output
//!
//! The numeric engine is currency-agnostic; this module is where currency
//! symbols and contextual precision enter. Callers resolve a symbol (see
//! [`crate::models::currency_symbol`]) and pass it in.

pub mod calculator;

pub use calculator::{
    format_currency, format_inflation_adjusted, format_mortgage, format_pe, format_years,
    format_yield,
};

/// Render a percentage as a fixed-width progress bar
///
/// Values outside [0, 100] are clamped, matching the dashboard's bars.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let percent = percent.clamp(0.0, 100.0);
    let filled = (percent / 100.0 * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
