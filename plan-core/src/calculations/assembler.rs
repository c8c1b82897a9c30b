//! Combines projections and recommendations into one result snapshot.

use crate::calculations::recommendations;
use crate::calculations::projection::ProjectionEngine;
use crate::models::{FormState, PlanConfig, PlanConfigError, PortfolioAllocation, ResultSnapshot};

/// Assembles a [`ResultSnapshot`] from a finalized form.
///
/// Pure: assembling twice from the same form yields an equal snapshot. The
/// portfolio split is a constant, not derived from the answers.
///
/// # Example
///
/// ```
/// use plan_core::ResultAssembler;
/// use plan_core::models::{FormState, PlanConfig};
/// use rust_decimal_macros::dec;
///
/// let mut form = FormState::default();
/// form.sip_amount = "5000".to_string();
/// form.goals[0].name = "House".to_string();
/// form.goals[0].time_frame_years = "10".to_string();
/// form.goals[0].target_amount = "2000000".to_string();
///
/// let assembler = ResultAssembler::new(PlanConfig::default());
/// let snapshot = assembler.assemble(&form).unwrap();
///
/// assert_eq!(snapshot.goal_projections[0].projected_amount, dec!(1161695));
/// assert_eq!(snapshot.portfolio_allocation.total(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct ResultAssembler {
    engine: ProjectionEngine,
}

impl ResultAssembler {
    pub fn new(config: PlanConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }

    pub fn config(&self) -> &PlanConfig {
        self.engine.config()
    }

    /// Runs the projection and recommendation engines over `form`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanConfigError`] when the planning assumptions themselves
    /// are invalid. Form input never fails: the engines degrade bad strings
    /// to zero.
    pub fn assemble(
        &self,
        form: &FormState,
    ) -> Result<ResultSnapshot, PlanConfigError> {
        self.engine.config().validate()?;

        let retirement_corpus = self.engine.retirement_corpus(form);

        Ok(ResultSnapshot {
            total_investment: self.engine.total_investment(form),
            goal_projections: self.engine.goal_projections(form),
            retirement_corpus,
            portfolio_allocation: PortfolioAllocation::default(),
            recommendations: recommendations::evaluate(form, retirement_corpus),
        })
    }
}
