//! Wizard state machine.
//!
//! Owns the form, the current step, and the computed snapshot. All form
//! mutation goes through the setters here; the step only moves through
//! `advance`, `retreat`, `export`, `view_full_report`, and `reset`.

use plan_core::ResultAssembler;
use plan_core::models::{
    ContactInfo, FormState, Goal, InvestmentMode, PlanConfig, PlanConfigError, ResultSnapshot,
};
use plan_core::validation::is_valid_email;
use plan_store::ContactStore;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::export::{ExportError, ReportExporter};
use crate::steps::{WizardStep, is_step_complete};

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("step '{0}' is incomplete")]
    IncompleteStep(WizardStep),

    #[error("no goal at index {0}")]
    GoalIndex(usize),

    #[error("at least one goal must remain")]
    LastGoal,

    #[error("results have not been computed yet")]
    MissingSnapshot,

    #[error("contact details are incomplete")]
    MissingContactDetails,

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("no report has been generated")]
    ReportNotGenerated,

    #[error(transparent)]
    Config(#[from] PlanConfigError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Drives a visitor through the questionnaire.
///
/// Forward movement is gated on step completeness; backward movement is
/// unconditional. The snapshot is computed exactly once per pass, on the
/// forward transition out of [`WizardStep::TaxRetirement`], and replaced if
/// the visitor goes back, edits, and advances again.
pub struct WizardController {
    assembler: ResultAssembler,
    form: FormState,
    step: WizardStep,
    snapshot: Option<ResultSnapshot>,
    contact_on_file: bool,
    report_generated: bool,
}

impl WizardController {
    pub fn new(config: PlanConfig) -> Self {
        Self {
            assembler: ResultAssembler::new(config),
            form: FormState::default(),
            step: WizardStep::Mode,
            snapshot: None,
            contact_on_file: false,
            report_generated: false,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn snapshot(&self) -> Option<&ResultSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn config(&self) -> &PlanConfig {
        self.assembler.config()
    }

    pub fn contact_on_file(&self) -> bool {
        self.contact_on_file
    }

    pub fn report_generated(&self) -> bool {
        self.report_generated
    }

    /// Whether the current step's required fields are all valid.
    pub fn current_step_complete(&self) -> bool {
        is_step_complete(self.step, &self.form, self.assembler.config())
    }

    // =========================================================================
    // field setters
    // =========================================================================

    pub fn set_investment_mode(
        &mut self,
        mode: InvestmentMode,
    ) {
        self.form.investment_mode = mode;
    }

    pub fn set_sip_amount(
        &mut self,
        raw: &str,
    ) {
        self.form.sip_amount = raw.to_string();
    }

    pub fn set_lumpsum_amount(
        &mut self,
        raw: &str,
    ) {
        self.form.lumpsum_amount = raw.to_string();
    }

    pub fn set_emergency_fund(
        &mut self,
        answer: bool,
    ) {
        self.form.has_emergency_fund = Some(answer);
    }

    pub fn set_health_insurance(
        &mut self,
        answer: bool,
    ) {
        self.form.has_health_insurance = Some(answer);
    }

    pub fn set_life_insurance(
        &mut self,
        answer: bool,
    ) {
        self.form.has_life_insurance = Some(answer);
    }

    pub fn set_tax_saving(
        &mut self,
        answer: bool,
    ) {
        self.form.wants_tax_saving = Some(answer);
    }

    pub fn set_retirement(
        &mut self,
        answer: bool,
    ) {
        self.form.wants_retirement = Some(answer);
    }

    pub fn set_monthly_expenses(
        &mut self,
        raw: &str,
    ) {
        self.form.monthly_expenses = raw.to_string();
    }

    pub fn set_contact_name(
        &mut self,
        raw: &str,
    ) {
        self.form.contact_info.name = raw.to_string();
    }

    pub fn set_contact_email(
        &mut self,
        raw: &str,
    ) {
        self.form.contact_info.email = raw.to_string();
    }

    pub fn set_contact_phone(
        &mut self,
        raw: &str,
    ) {
        self.form.contact_info.phone = raw.to_string();
    }

    // =========================================================================
    // goal list
    // =========================================================================

    pub fn add_goal(&mut self) {
        self.form.goals.push(Goal::default());
    }

    /// Removes the goal at `index`.
    ///
    /// # Errors
    ///
    /// [`WizardError::LastGoal`] when only one goal remains;
    /// [`WizardError::GoalIndex`] when `index` is out of bounds.
    pub fn remove_goal(
        &mut self,
        index: usize,
    ) -> Result<(), WizardError> {
        if self.form.goals.len() <= 1 {
            return Err(WizardError::LastGoal);
        }
        if index >= self.form.goals.len() {
            return Err(WizardError::GoalIndex(index));
        }
        self.form.goals.remove(index);
        Ok(())
    }

    pub fn set_goal_name(
        &mut self,
        index: usize,
        raw: &str,
    ) -> Result<(), WizardError> {
        let goal = self.goal_mut(index)?;
        goal.name = raw.to_string();
        Ok(())
    }

    pub fn set_goal_time_frame(
        &mut self,
        index: usize,
        raw: &str,
    ) -> Result<(), WizardError> {
        let goal = self.goal_mut(index)?;
        goal.time_frame_years = raw.to_string();
        Ok(())
    }

    pub fn set_goal_target(
        &mut self,
        index: usize,
        raw: &str,
    ) -> Result<(), WizardError> {
        let goal = self.goal_mut(index)?;
        goal.target_amount = raw.to_string();
        Ok(())
    }

    fn goal_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut Goal, WizardError> {
        self.form
            .goals
            .get_mut(index)
            .ok_or(WizardError::GoalIndex(index))
    }

    // =========================================================================
    // step transitions
    // =========================================================================

    /// Moves to the next data-entry step, or onto the results.
    ///
    /// Past [`WizardStep::Results`] this is a no-op: the thank-you and
    /// full-report screens are reached through [`export`] and
    /// [`view_full_report`].
    ///
    /// # Errors
    ///
    /// [`WizardError::IncompleteStep`] when the current step's fields are
    /// not all valid; the step does not move. [`WizardError::Config`] when
    /// the planning assumptions fail validation at compute time.
    ///
    /// [`export`]: WizardController::export
    /// [`view_full_report`]: WizardController::view_full_report
    pub fn advance(&mut self) -> Result<(), WizardError> {
        if self.step >= WizardStep::Results {
            debug!(step = %self.step, "advance ignored past the results step");
            return Ok(());
        }
        if !self.current_step_complete() {
            return Err(WizardError::IncompleteStep(self.step));
        }

        if self.step == WizardStep::TaxRetirement {
            self.snapshot = Some(self.assembler.assemble(&self.form)?);
        }

        if let Some(next) = self.step.next() {
            debug!(from = %self.step, to = %next, "step advanced");
            self.step = next;
        }
        Ok(())
    }

    /// Moves back one step unconditionally. No-op at the first step.
    pub fn retreat(&mut self) {
        if let Some(prev) = self.step.prev() {
            debug!(from = %self.step, to = %prev, "step retreated");
            self.step = prev;
        }
    }

    /// One-shot startup load of a previously saved contact.
    ///
    /// An absent or unreadable record is never surfaced to the visitor; the
    /// form simply starts without a pre-fill.
    pub async fn restore_contact(
        &mut self,
        store: &dyn ContactStore,
    ) {
        match store.load().await {
            Ok(Some(contact)) => {
                info!("restored saved contact details");
                self.form.contact_info = contact;
                self.contact_on_file = true;
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "could not load saved contact details");
            }
        }
    }

    /// Exports the report and, on success, moves to the thank-you screen
    /// and persists the contact.
    ///
    /// A persistence failure after a successful export is logged and not
    /// surfaced; the visitor already has the report.
    ///
    /// # Errors
    ///
    /// [`WizardError::MissingSnapshot`] before the results are computed;
    /// [`WizardError::MissingContactDetails`] or
    /// [`WizardError::InvalidEmail`] on bad contact input;
    /// [`WizardError::Export`] when the exporter fails. On any error the
    /// step, form, and stores are left untouched so the visitor can retry.
    pub async fn export(
        &mut self,
        exporter: &dyn ReportExporter,
        store: &dyn ContactStore,
    ) -> Result<(), WizardError> {
        let Some(snapshot) = self.snapshot.as_ref() else {
            return Err(WizardError::MissingSnapshot);
        };
        if !self.form.contact_info.is_complete() {
            return Err(WizardError::MissingContactDetails);
        }
        if !is_valid_email(&self.form.contact_info.email) {
            return Err(WizardError::InvalidEmail(
                self.form.contact_info.email.clone(),
            ));
        }

        exporter.export(&self.form, snapshot)?;
        info!("report exported");

        self.step = WizardStep::ThankYou;
        self.report_generated = true;

        match store.save(&self.form.contact_info).await {
            Ok(()) => self.contact_on_file = true,
            Err(e) => {
                warn!(error = %e, "report exported but contact details could not be saved");
            }
        }
        Ok(())
    }

    /// Moves from the thank-you screen to the full report.
    ///
    /// # Errors
    ///
    /// [`WizardError::ReportNotGenerated`] before a successful export.
    pub fn view_full_report(&mut self) -> Result<(), WizardError> {
        if !self.report_generated {
            return Err(WizardError::ReportNotGenerated);
        }
        self.step = WizardStep::FullReport;
        Ok(())
    }

    /// Starts over: defaults restored, snapshot and report flags discarded.
    /// A contact known to be on file is kept as the pre-fill.
    pub fn reset(&mut self) {
        let contact = if self.contact_on_file {
            self.form.contact_info.clone()
        } else {
            ContactInfo::default()
        };

        self.form = FormState {
            contact_info: contact,
            ..FormState::default()
        };
        self.step = WizardStep::Mode;
        self.snapshot = None;
        self.report_generated = false;
        info!("wizard reset");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn controller() -> WizardController {
        WizardController::new(PlanConfig::default())
    }

    /// Fills every data-entry step and advances to the results.
    fn advance_to_results(wizard: &mut WizardController) {
        wizard.advance().unwrap();
        wizard.set_sip_amount("5000");
        wizard.advance().unwrap();
        wizard.set_emergency_fund(false);
        wizard.advance().unwrap();
        wizard.set_goal_name(0, "House").unwrap();
        wizard.set_goal_time_frame(0, "10").unwrap();
        wizard.set_goal_target(0, "2000000").unwrap();
        wizard.advance().unwrap();
        wizard.set_health_insurance(true);
        wizard.set_life_insurance(true);
        wizard.advance().unwrap();
        wizard.set_tax_saving(false);
        wizard.set_retirement(true);
        wizard.set_monthly_expenses("50000");
        wizard.advance().unwrap();
    }

    #[test]
    fn advance_refuses_to_leave_an_incomplete_step() {
        let mut wizard = controller();
        wizard.advance().unwrap();

        let err = wizard.advance().unwrap_err();

        assert!(matches!(err, WizardError::IncompleteStep(WizardStep::Amount)));
        assert_eq!(wizard.step(), WizardStep::Amount);
    }

    #[test]
    fn retirement_without_expenses_blocks_the_tax_step() {
        let mut wizard = controller();
        wizard.advance().unwrap();
        wizard.set_sip_amount("5000");
        wizard.advance().unwrap();
        wizard.set_emergency_fund(true);
        wizard.advance().unwrap();
        wizard.set_goal_name(0, "House").unwrap();
        wizard.set_goal_time_frame(0, "10").unwrap();
        wizard.set_goal_target(0, "2000000").unwrap();
        wizard.advance().unwrap();
        wizard.set_health_insurance(true);
        wizard.set_life_insurance(true);
        wizard.advance().unwrap();
        wizard.set_tax_saving(false);
        wizard.set_retirement(true);

        let err = wizard.advance().unwrap_err();

        assert!(matches!(
            err,
            WizardError::IncompleteStep(WizardStep::TaxRetirement)
        ));
        assert_eq!(wizard.snapshot(), None);
    }

    #[test]
    fn reaching_results_computes_the_snapshot() {
        let mut wizard = controller();

        advance_to_results(&mut wizard);

        assert_eq!(wizard.step(), WizardStep::Results);
        let snapshot = wizard.snapshot().unwrap();
        assert_eq!(snapshot.goal_projections[0].projected_amount, dec!(1161695));
        assert_eq!(snapshot.retirement_corpus, dec!(15000000));
    }

    #[test]
    fn editing_after_retreat_replaces_the_snapshot() {
        let mut wizard = controller();
        advance_to_results(&mut wizard);
        let first = wizard.snapshot().unwrap().clone();

        wizard.retreat();
        wizard.set_monthly_expenses("60000");
        wizard.advance().unwrap();

        let second = wizard.snapshot().unwrap();
        assert_ne!(&first, second);
        assert_eq!(second.retirement_corpus, dec!(18000000));
    }

    #[test]
    fn retreat_is_a_no_op_at_the_first_step() {
        let mut wizard = controller();

        wizard.retreat();

        assert_eq!(wizard.step(), WizardStep::Mode);
    }

    #[test]
    fn the_last_goal_cannot_be_removed() {
        let mut wizard = controller();

        let err = wizard.remove_goal(0).unwrap_err();

        assert!(matches!(err, WizardError::LastGoal));
        assert_eq!(wizard.form().goals.len(), 1);
    }

    #[test]
    fn goals_can_be_added_and_removed_down_to_one() {
        let mut wizard = controller();
        wizard.add_goal();
        wizard.add_goal();
        assert_eq!(wizard.form().goals.len(), 3);

        wizard.remove_goal(1).unwrap();
        wizard.remove_goal(1).unwrap();

        assert_eq!(wizard.form().goals.len(), 1);
        assert!(matches!(
            wizard.remove_goal(0).unwrap_err(),
            WizardError::LastGoal
        ));
    }

    #[test]
    fn goal_setters_reject_a_bad_index() {
        let mut wizard = controller();

        let err = wizard.set_goal_name(5, "House").unwrap_err();

        assert!(matches!(err, WizardError::GoalIndex(5)));
    }

    #[test]
    fn full_report_is_locked_until_a_report_exists() {
        let mut wizard = controller();

        let err = wizard.view_full_report().unwrap_err();

        assert!(matches!(err, WizardError::ReportNotGenerated));
        assert_eq!(wizard.step(), WizardStep::Mode);
    }

    #[test]
    fn reset_discards_results_but_keeps_the_step_machine_usable() {
        let mut wizard = controller();
        advance_to_results(&mut wizard);

        wizard.reset();

        assert_eq!(wizard.step(), WizardStep::Mode);
        assert_eq!(wizard.snapshot(), None);
        assert_eq!(wizard.form(), &FormState::default());
        assert!(!wizard.report_generated());
    }
}
