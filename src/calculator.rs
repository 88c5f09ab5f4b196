//! Budget reconciliation of a layout against the room's budget

use std::fmt;

use tracing::warn;

use crate::models::{LayoutResult, RoomSpec};

/// Usage above this percentage is critical.
pub const CRITICAL_ABOVE: f64 = 95.0;
/// Usage above this percentage (and not critical) is a warning.
pub const WARNING_ABOVE: f64 = 80.0;

/// Line-item totals may differ from the service total by rounding only.
const MISMATCH_TOLERANCE: f64 = 0.01;

/// Urgency of the budget bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Normal,
    Warning,
    Critical,
}

impl BudgetStatus {
    /// Strict thresholds: exactly 95% is a warning, exactly 80% is normal.
    pub fn classify(used_percentage: f64) -> Self {
        if used_percentage > CRITICAL_ABOVE {
            BudgetStatus::Critical
        } else if used_percentage > WARNING_ABOVE {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Normal
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BudgetStatus::Normal => "normal",
            BudgetStatus::Warning => "warning",
            BudgetStatus::Critical => "critical",
        };
        f.write_str(s)
    }
}

/// Spent, remaining and percentage used for one layout.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub total_items: usize,
    pub total_cost: f64,
    pub budget: f64,
    pub remaining: f64,
    pub used_percentage: f64,
    /// Sum of the individual item prices.
    pub line_item_total: f64,
}

impl BudgetSummary {
    pub fn status(&self) -> BudgetStatus {
        BudgetStatus::classify(self.used_percentage)
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining < 0.0
    }

    /// Amount by which the budget is exceeded, if it is.
    pub fn overage(&self) -> Option<f64> {
        self.is_over_budget().then(|| self.remaining.abs())
    }

    /// Width of the budget bar as a percentage, capped at 100.
    pub fn bar_fill(&self) -> f64 {
        self.used_percentage.min(100.0)
    }

    /// Difference between the service total and the line items, when it
    /// exceeds rounding.
    pub fn cost_mismatch(&self) -> Option<f64> {
        let diff = self.total_cost - self.line_item_total;
        (diff.abs() > MISMATCH_TOLERANCE).then_some(diff)
    }
}

/// Summarize a layout against its room.
///
/// `total_cost` is taken from the service as-is; the line-item sum is kept
/// alongside so a disagreement can be reported without altering the figures.
pub fn reconcile(layout: &LayoutResult, room: &RoomSpec) -> BudgetSummary {
    let total_cost = layout.total_cost;
    let budget = room.budget;
    let used_percentage = if budget > 0.0 {
        total_cost / budget * 100.0
    } else {
        0.0
    };
    let line_item_total = layout.furniture.iter().map(|p| p.price).sum();

    let summary = BudgetSummary {
        total_items: layout.furniture.len(),
        total_cost,
        budget,
        remaining: budget - total_cost,
        used_percentage,
        line_item_total,
    };

    if let Some(diff) = summary.cost_mismatch() {
        warn!(
            service_total = total_cost,
            line_item_total = summary.line_item_total,
            difference = diff,
            "layout total does not match the sum of item prices"
        );
    }

    summary
}

impl fmt::Display for BudgetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Cost Summary ===")?;
        writeln!(f, "Items placed: {}", self.total_items)?;
        writeln!(
            f,
            "Budget used:  {:.1}% ({})",
            self.used_percentage,
            self.status()
        )?;
        writeln!(f, "  [{}]", progress_bar(self.bar_fill(), 30))?;
        writeln!(f, "Spent:     ${:.2}", self.total_cost)?;
        writeln!(f, "Budget:    ${:.2}", self.budget)?;
        writeln!(f, "Remaining: ${:.2}", self.remaining)?;

        if let Some(over) = self.overage() {
            writeln!(f)?;
            writeln!(f, "Over Budget: the layout exceeds your budget by ${:.2}", over)?;
        }
        if let Some(diff) = self.cost_mismatch() {
            writeln!(f)?;
            writeln!(
                f,
                "Note: item prices add up to ${:.2}, which differs from the quoted total by ${:.2}",
                self.line_item_total,
                diff.abs()
            )?;
        }

        Ok(())
    }
}

fn progress_bar(percent: f64, cells: usize) -> String {
    let filled = ((percent.max(0.0) / 100.0) * cells as f64).round() as usize;
    let filled = filled.min(cells);
    format!("{}{}", "#".repeat(filled), "-".repeat(cells - filled))
}
