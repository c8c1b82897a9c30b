//! Future-value projections for SIP and lumpsum investments.
//!
//! All inputs are expected to be pre-validated by the wizard before results
//! are shown; the engine itself never rejects input. Bad or half-entered
//! strings degrade to zero so the same code can drive live previews while
//! the visitor is still typing.
//!
//! # Formulas
//!
//! With a flat annual return `r` and a horizon of `t` years:
//!
//! - SIP (monthly contribution `P`, `n = 12t` months, `i = r/12`):
//!   `FV = P × ((1 + i)^n − 1) / i × (1 + i)`
//! - Lumpsum (principal `P`): `FV = P × (1 + r)^t`
//! - Combined mode sums both, using the respective amount fields.
//!
//! The growth factor is evaluated in `f64` and rounded once, half away from
//! zero, to whole currency units.

use rust_decimal::Decimal;

use crate::calculations::common::{round_to_unit, to_f64};
use crate::models::{FormState, Goal, GoalProjection, InvestmentMode, PlanConfig};
use crate::validation::{amount_or_zero, years_or_zero};

/// Projected amount as a percentage of target, rounded and capped at 100.
///
/// A non-positive target scores 0: the division is guarded rather than
/// surfaced, so a blank target mid-entry never panics a preview.
pub fn achievement_percent(
    projected: f64,
    target: f64,
) -> u8 {
    if target <= 0.0 {
        return 0;
    }
    let percent = (projected / target * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

/// Calculator for forward-looking investment projections.
///
/// # Example
///
/// ```
/// use plan_core::ProjectionEngine;
/// use plan_core::models::PlanConfig;
/// use rust_decimal_macros::dec;
///
/// let engine = ProjectionEngine::new(PlanConfig::default());
///
/// // ₹5,000/month for 10 years at 12% p.a.
/// let fv = engine.sip_future_value(dec!(5000), 10);
/// assert_eq!(fv.round(), 1161695.0);
/// ```
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    config: PlanConfig,
}

impl ProjectionEngine {
    /// Creates a new engine with the given planning assumptions.
    pub fn new(config: PlanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Future value of a recurring monthly contribution after `years` years.
    ///
    /// Returned unrounded so combined-mode sums round only once.
    pub fn sip_future_value(
        &self,
        monthly: Decimal,
        years: u32,
    ) -> f64 {
        let p = to_f64(monthly);
        let monthly_rate = to_f64(self.config.annual_return_rate) / 12.0;
        let months = years.saturating_mul(12).min(i32::MAX as u32);
        if monthly_rate <= 0.0 {
            // Degenerate unvalidated config: a 0% annuity is just the sum
            // of the contributions.
            return p * f64::from(months as i32);
        }
        p * ((1.0 + monthly_rate).powi(months as i32) - 1.0) / monthly_rate * (1.0 + monthly_rate)
    }

    /// Future value of a one-time principal after `years` years.
    pub fn lumpsum_future_value(
        &self,
        principal: Decimal,
        years: u32,
    ) -> f64 {
        let annual_rate = to_f64(self.config.annual_return_rate);
        to_f64(principal) * (1.0 + annual_rate).powi(years.min(i32::MAX as u32) as i32)
    }

    /// Unrounded projected value of the mode-relevant contributions over
    /// `years` years.
    fn projected_amount(
        &self,
        form: &FormState,
        years: u32,
    ) -> f64 {
        let mut projected = 0.0;
        if matches!(
            form.investment_mode,
            InvestmentMode::Sip | InvestmentMode::Both
        ) {
            projected += self.sip_future_value(amount_or_zero(&form.sip_amount), years);
        }
        if matches!(
            form.investment_mode,
            InvestmentMode::Lumpsum | InvestmentMode::Both
        ) {
            projected += self.lumpsum_future_value(amount_or_zero(&form.lumpsum_amount), years);
        }
        projected
    }

    /// Projects a single goal against the form's contributions.
    pub fn project_goal(
        &self,
        form: &FormState,
        index: usize,
        goal: &Goal,
    ) -> GoalProjection {
        let years = years_or_zero(&goal.time_frame_years);
        let target = amount_or_zero(&goal.target_amount);
        let projected = self.projected_amount(form, years);
        let target_f = to_f64(target);
        let shortfall = (target_f - projected).max(0.0);

        let goal_name = if goal.name.trim().is_empty() {
            format!("Goal {}", index + 1)
        } else {
            goal.name.clone()
        };

        GoalProjection {
            goal_name,
            time_frame_years: years,
            target_amount: target,
            projected_amount: round_to_unit(projected),
            shortfall: round_to_unit(shortfall),
            achievement_percent: achievement_percent(projected, target_f),
        }
    }

    /// Projects every goal, in form order.
    pub fn goal_projections(
        &self,
        form: &FormState,
    ) -> Vec<GoalProjection> {
        form.goals
            .iter()
            .enumerate()
            .map(|(index, goal)| self.project_goal(form, index, goal))
            .collect()
    }

    /// Sum of the amount field(s) actually used by the selected mode.
    pub fn total_investment(
        &self,
        form: &FormState,
    ) -> Decimal {
        let sip = amount_or_zero(&form.sip_amount);
        let lumpsum = amount_or_zero(&form.lumpsum_amount);
        match form.investment_mode {
            InvestmentMode::Sip => sip,
            InvestmentMode::Lumpsum => lumpsum,
            InvestmentMode::Both => sip.saturating_add(lumpsum),
        }
    }

    /// Corpus needed to fund the configured post-retirement horizon:
    /// `monthly_expenses × 12 × retirement_years`, no inflation adjustment.
    ///
    /// Zero unless the visitor asked for retirement planning.
    pub fn retirement_corpus(
        &self,
        form: &FormState,
    ) -> Decimal {
        if form.wants_retirement != Some(true) {
            return Decimal::ZERO;
        }
        let monthly = amount_or_zero(&form.monthly_expenses);
        let months = Decimal::from(u64::from(self.config.retirement_years) * 12);
        monthly.saturating_mul(months)
    }
}
