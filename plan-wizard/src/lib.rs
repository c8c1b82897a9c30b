//! Step sequencing and orchestration for the investment-planning
//! questionnaire.
//!
//! [`WizardController`] walks a visitor through the data-entry steps, runs
//! the projection on the way into the results, and coordinates report
//! export with contact persistence. Rendering and storage stay behind the
//! [`ReportExporter`] and `ContactStore` seams.

pub mod controller;
pub mod export;
pub mod logging;
pub mod steps;

pub use controller::{WizardController, WizardError};
pub use export::{ExportError, ReportExporter};
pub use steps::{WizardStep, is_step_complete};
