//! Form data collected by the questionnaire.
//!
//! Numeric fields are kept as raw strings so partially-typed input can be
//! held (and previewed) before it passes validation. All mutation goes
//! through the wizard controller; this module is plain data.

use serde::{Deserialize, Serialize};

/// How the visitor intends to invest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentMode {
    /// Recurring monthly contribution (Systematic Investment Plan).
    #[default]
    Sip,
    /// Single one-time contribution.
    Lumpsum,
    /// Both a recurring and a one-time contribution.
    Both,
}

/// A named financial target with a time horizon and target amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    /// Horizon in whole years, as entered.
    pub time_frame_years: String,
    /// Target amount in currency units, as entered.
    pub target_amount: String,
}

/// Contact details captured before the report download.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactInfo {
    /// Returns `true` when all three fields are non-blank.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.trim().is_empty()
    }
}

/// Everything the questionnaire collects across its data-entry steps.
///
/// The yes/no questions are tri-state: `None` means the visitor has not
/// answered yet, which blocks completion of the owning step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub investment_mode: InvestmentMode,
    pub sip_amount: String,
    pub lumpsum_amount: String,
    pub has_emergency_fund: Option<bool>,
    pub has_health_insurance: Option<bool>,
    pub has_life_insurance: Option<bool>,
    pub wants_tax_saving: Option<bool>,
    pub wants_retirement: Option<bool>,
    /// Invariant: never empty. The wizard refuses to remove the last goal.
    pub goals: Vec<Goal>,
    /// Required only when `wants_retirement` is `Some(true)`.
    pub monthly_expenses: String,
    pub contact_info: ContactInfo,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            investment_mode: InvestmentMode::default(),
            sip_amount: String::new(),
            lumpsum_amount: String::new(),
            has_emergency_fund: None,
            has_health_insurance: None,
            has_life_insurance: None,
            wants_tax_saving: None,
            wants_retirement: None,
            goals: vec![Goal::default()],
            monthly_expenses: String::new(),
            contact_info: ContactInfo::default(),
        }
    }
}
