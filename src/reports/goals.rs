//! Goal progress report
//!
//! Per-goal progress rows plus the achieved-over-total headline shown on
//! the dashboard.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Goal, GoalId, Money};

/// Progress of a single goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Goal ID
    pub goal_id: GoalId,
    /// Goal name
    pub name: String,
    /// Saved amount
    pub current_amount: Money,
    /// Target amount
    pub target_amount: Money,
    /// Unclamped progress percentage (may exceed 100)
    pub ratio: f64,
    /// Progress clamped to [0, 100] for bar rendering
    pub display_progress: f64,
    /// Achieved flag or ratio at 100%
    pub complete: bool,
}

/// Goal progress summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgressReport {
    /// Per-goal rows, in snapshot order
    pub goals: Vec<GoalProgress>,
    /// Number of complete goals
    pub achieved_count: usize,
    /// Total number of goals
    pub total_count: usize,
}

impl GoalProgressReport {
    /// Compute the report over a goal snapshot
    pub fn generate(goals: &[Goal]) -> Self {
        let rows: Vec<GoalProgress> = goals
            .iter()
            .map(|g| GoalProgress {
                goal_id: g.id,
                name: g.name.clone(),
                current_amount: g.current_amount,
                target_amount: g.target_amount,
                ratio: g.progress_ratio(),
                display_progress: g.display_progress(),
                complete: g.is_complete(),
            })
            .collect();

        let achieved_count = rows.iter().filter(|r| r.complete).count();
        Self {
            achieved_count,
            total_count: rows.len(),
            goals: rows,
        }
    }

    /// Headline string, e.g. "2/5"
    pub fn headline(&self) -> String {
        format!("{}/{}", self.achieved_count, self.total_count)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!("Goals achieved: {}\n", self.headline()));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for row in &self.goals {
            let marker = if row.complete { "x" } else { " " };
            output.push_str(&format!(
                "[{}] {:<24} {} {:>12} / {:<12} {:>5.1}%\n",
                marker,
                row.name,
                crate::display::progress_bar(row.display_progress, 10),
                row.current_amount.format_with_symbol(symbol),
                row.target_amount.format_with_symbol(symbol),
                row.display_progress
            ));
        }
        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TrackerResult<()> {
        writeln!(writer, "Name,Current,Target,Progress,Complete")
            .map_err(|e| TrackerError::Export(e.to_string()))?;
        for row in &self.goals {
            writeln!(
                writer,
                "{},{:.2},{:.2},{:.1},{}",
                row.name,
                row.current_amount.as_major(),
                row.target_amount.as_major(),
                row.ratio,
                row.complete
            )
            .map_err(|e| TrackerError::Export(e.to_string()))?;
        }
        Ok(())
    }
}
