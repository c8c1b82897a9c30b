//! End-to-end wizard runs against the in-memory contact store.

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use plan_core::models::{FormState, PlanConfig, ResultSnapshot};
use plan_store::{CONTACT_KEY, MemoryStore};
use plan_wizard::{ExportError, ReportExporter, WizardController, WizardError, WizardStep};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use serde_json::json;

/// Counts exports instead of rendering anything.
#[derive(Default)]
struct CountingExporter {
    exports: AtomicUsize,
    fail: bool,
}

impl CountingExporter {
    fn failing() -> Self {
        Self {
            exports: AtomicUsize::new(0),
            fail: true,
        }
    }

    fn count(&self) -> usize {
        self.exports.load(Ordering::SeqCst)
    }
}

impl ReportExporter for CountingExporter {
    fn export(
        &self,
        _form: &FormState,
        _snapshot: &ResultSnapshot,
    ) -> Result<(), ExportError> {
        if self.fail {
            return Err(ExportError::Render("renderer unavailable".to_string()));
        }
        self.exports.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn fill_and_reach_results(wizard: &mut WizardController) -> Result<()> {
    wizard.advance()?;
    wizard.set_sip_amount("5000");
    wizard.advance()?;
    wizard.set_emergency_fund(false);
    wizard.advance()?;
    wizard.set_goal_name(0, "House")?;
    wizard.set_goal_time_frame(0, "10")?;
    wizard.set_goal_target(0, "2000000")?;
    wizard.advance()?;
    wizard.set_health_insurance(true);
    wizard.set_life_insurance(true);
    wizard.advance()?;
    wizard.set_tax_saving(true);
    wizard.set_retirement(true);
    wizard.set_monthly_expenses("50000");
    wizard.advance()?;
    Ok(())
}

fn enter_contact(wizard: &mut WizardController) {
    wizard.set_contact_name("Asha Rao");
    wizard.set_contact_email("asha@example.com");
    wizard.set_contact_phone("9876543210");
}

#[tokio::test]
async fn happy_path_runs_from_mode_to_full_report() -> Result<()> {
    let store = MemoryStore::new();
    let exporter = CountingExporter::default();
    let mut wizard = WizardController::new(PlanConfig::default());
    wizard.restore_contact(&store).await;
    assert!(!wizard.contact_on_file());

    fill_and_reach_results(&mut wizard)?;
    assert_eq!(wizard.step(), WizardStep::Results);
    let snapshot = wizard.snapshot().cloned().ok_or_else(|| anyhow::anyhow!("no snapshot"))?;
    assert_eq!(snapshot.goal_projections[0].projected_amount, dec!(1161695));
    assert_eq!(snapshot.retirement_corpus, dec!(15000000));

    enter_contact(&mut wizard);
    wizard.export(&exporter, &store).await?;
    assert_eq!(wizard.step(), WizardStep::ThankYou);
    assert_eq!(exporter.count(), 1);
    assert!(wizard.contact_on_file());
    assert!(store.contains_contact());

    wizard.view_full_report()?;
    assert_eq!(wizard.step(), WizardStep::FullReport);
    Ok(())
}

#[tokio::test]
async fn bad_email_rejects_the_export_and_persists_nothing() -> Result<()> {
    let store = MemoryStore::new();
    let exporter = CountingExporter::default();
    let mut wizard = WizardController::new(PlanConfig::default());
    fill_and_reach_results(&mut wizard)?;

    wizard.set_contact_name("Asha Rao");
    wizard.set_contact_email("bad-email");
    wizard.set_contact_phone("9876543210");
    let err = wizard.export(&exporter, &store).await.unwrap_err();

    assert!(matches!(err, WizardError::InvalidEmail(_)));
    assert_eq!(wizard.step(), WizardStep::Results);
    assert_eq!(exporter.count(), 0);
    assert!(!store.contains_contact());
    Ok(())
}

#[tokio::test]
async fn incomplete_contact_rejects_the_export() -> Result<()> {
    let store = MemoryStore::new();
    let exporter = CountingExporter::default();
    let mut wizard = WizardController::new(PlanConfig::default());
    fill_and_reach_results(&mut wizard)?;

    wizard.set_contact_name("Asha Rao");
    let err = wizard.export(&exporter, &store).await.unwrap_err();

    assert!(matches!(err, WizardError::MissingContactDetails));
    assert_eq!(exporter.count(), 0);
    Ok(())
}

#[tokio::test]
async fn export_before_results_is_rejected() -> Result<()> {
    let store = MemoryStore::new();
    let exporter = CountingExporter::default();
    let mut wizard = WizardController::new(PlanConfig::default());
    enter_contact(&mut wizard);

    let err = wizard.export(&exporter, &store).await.unwrap_err();

    assert!(matches!(err, WizardError::MissingSnapshot));
    Ok(())
}

#[tokio::test]
async fn exporter_failure_leaves_state_intact_for_retry() -> Result<()> {
    let store = MemoryStore::new();
    let failing = CountingExporter::failing();
    let mut wizard = WizardController::new(PlanConfig::default());
    fill_and_reach_results(&mut wizard)?;
    enter_contact(&mut wizard);

    let err = wizard.export(&failing, &store).await.unwrap_err();
    assert!(matches!(err, WizardError::Export(ExportError::Render(_))));
    assert_eq!(wizard.step(), WizardStep::Results);
    assert!(!store.contains_contact());
    assert!(!wizard.report_generated());

    let working = CountingExporter::default();
    wizard.export(&working, &store).await?;
    assert_eq!(wizard.step(), WizardStep::ThankYou);
    assert_eq!(working.count(), 1);
    Ok(())
}

#[tokio::test]
async fn saved_contact_prefills_the_next_session() -> Result<()> {
    let store = MemoryStore::new();
    let exporter = CountingExporter::default();

    let mut first = WizardController::new(PlanConfig::default());
    fill_and_reach_results(&mut first)?;
    enter_contact(&mut first);
    first.export(&exporter, &store).await?;

    let mut second = WizardController::new(PlanConfig::default());
    second.restore_contact(&store).await;

    assert!(second.contact_on_file());
    assert_eq!(second.form().contact_info.email, "asha@example.com");
    Ok(())
}

#[tokio::test]
async fn corrupt_stored_record_means_no_prefill() -> Result<()> {
    let store = MemoryStore::new();
    store.insert_raw(CONTACT_KEY, json!({"name": 42}));

    let mut wizard = WizardController::new(PlanConfig::default());
    wizard.restore_contact(&store).await;

    assert!(!wizard.contact_on_file());
    assert_eq!(wizard.form().contact_info.name, "");
    Ok(())
}

#[tokio::test]
async fn reset_retains_a_persisted_contact() -> Result<()> {
    let store = MemoryStore::new();
    let exporter = CountingExporter::default();
    let mut wizard = WizardController::new(PlanConfig::default());
    fill_and_reach_results(&mut wizard)?;
    enter_contact(&mut wizard);
    wizard.export(&exporter, &store).await?;

    wizard.reset();

    assert_eq!(wizard.step(), WizardStep::Mode);
    assert_eq!(wizard.snapshot(), None);
    assert_eq!(wizard.form().contact_info.email, "asha@example.com");
    assert_eq!(wizard.form().sip_amount, "");
    assert!(!wizard.report_generated());
    Ok(())
}
