//! The immutable result of one "compute" action.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Projection for a single goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProjection {
    /// Goal name, or `"Goal N"` when the visitor left it blank.
    pub goal_name: String,
    /// Horizon in whole years.
    pub time_frame_years: u32,
    /// Target amount as entered (zero when unparseable).
    pub target_amount: Decimal,
    /// Projected future value, rounded to whole currency units.
    pub projected_amount: Decimal,
    /// `max(0, target - projected)`, rounded to whole currency units.
    pub shortfall: Decimal,
    /// Projected amount as a percentage of target, capped at 100.
    pub achievement_percent: u8,
}

/// Suggested four-way portfolio split, in percent.
///
/// Currently a fixed split regardless of the visitor's answers; kept as a
/// validated constant so the report renderer has one source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioAllocation {
    pub equity: u8,
    pub debt: u8,
    pub gold: u8,
    pub crypto: u8,
}

impl Default for PortfolioAllocation {
    fn default() -> Self {
        Self {
            equity: 60,
            debt: 25,
            gold: 10,
            crypto: 5,
        }
    }
}

impl PortfolioAllocation {
    /// Sum of the four components. Always 100 for a well-formed split.
    pub fn total(&self) -> u32 {
        u32::from(self.equity) + u32::from(self.debt) + u32::from(self.gold) + u32::from(self.crypto)
    }
}

/// One complete result of running projections over a finalized form.
///
/// Snapshots are value objects: recomputing from the same form state yields
/// an equal snapshot, and revising inputs replaces the snapshot wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSnapshot {
    /// Sum of the amount field(s) used by the selected investment mode.
    pub total_investment: Decimal,
    /// One entry per goal, in form order.
    pub goal_projections: Vec<GoalProjection>,
    /// Zero when retirement planning was not requested.
    pub retirement_corpus: Decimal,
    pub portfolio_allocation: PortfolioAllocation,
    /// Advisory messages in fixed rule-evaluation order.
    pub recommendations: Vec<String>,
}
