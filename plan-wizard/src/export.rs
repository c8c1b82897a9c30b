//! Report export seam.
//!
//! The wizard produces the data; rendering (PDF, HTML, anything else) is a
//! host concern behind this trait. The controller only cares whether the
//! export succeeded, because that is what drives the thank-you transition
//! and contact persistence.

use plan_core::models::{FormState, ResultSnapshot};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("report rendering failed: {0}")]
    Render(String),

    #[error("report I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub trait ReportExporter: Send + Sync {
    /// Renders and delivers the report for the given form and results.
    ///
    /// # Errors
    ///
    /// Returns an [`ExportError`] when rendering or delivery fails; the
    /// caller leaves the wizard state untouched so the visitor can retry.
    fn export(
        &self,
        form: &FormState,
        snapshot: &ResultSnapshot,
    ) -> Result<(), ExportError>;
}
