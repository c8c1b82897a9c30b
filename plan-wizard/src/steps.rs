//! The ordered questionnaire steps and their completion rules.

use std::fmt;

use plan_core::models::{FormState, InvestmentMode, PlanConfig};
use plan_core::validation::is_valid_amount;

/// One screen of the questionnaire, in visit order.
///
/// The sequence is strictly linear. Steps up to [`TaxRetirement`] collect
/// data and are gated by [`is_step_complete`]; the remaining steps present
/// results and are reached through dedicated controller operations.
///
/// [`TaxRetirement`]: WizardStep::TaxRetirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Mode,
    Amount,
    EmergencyFund,
    Goals,
    Insurance,
    TaxRetirement,
    Results,
    ThankYou,
    FullReport,
}

impl WizardStep {
    pub const ALL: [WizardStep; 9] = [
        WizardStep::Mode,
        WizardStep::Amount,
        WizardStep::EmergencyFund,
        WizardStep::Goals,
        WizardStep::Insurance,
        WizardStep::TaxRetirement,
        WizardStep::Results,
        WizardStep::ThankYou,
        WizardStep::FullReport,
    ];

    /// Zero-based position in the sequence.
    pub fn index(self) -> usize {
        match self {
            WizardStep::Mode => 0,
            WizardStep::Amount => 1,
            WizardStep::EmergencyFund => 2,
            WizardStep::Goals => 3,
            WizardStep::Insurance => 4,
            WizardStep::TaxRetirement => 5,
            WizardStep::Results => 6,
            WizardStep::ThankYou => 7,
            WizardStep::FullReport => 8,
        }
    }

    /// The following step, or `None` at the terminal step.
    pub fn next(self) -> Option<WizardStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// The preceding step, or `None` at the first step.
    pub fn prev(self) -> Option<WizardStep> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Heading text for a host UI.
    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Mode => "Investment Mode",
            WizardStep::Amount => "Investment Amount",
            WizardStep::EmergencyFund => "Emergency Fund",
            WizardStep::Goals => "Financial Goals",
            WizardStep::Insurance => "Insurance Cover",
            WizardStep::TaxRetirement => "Tax & Retirement",
            WizardStep::Results => "Investment Summary",
            WizardStep::ThankYou => "Thank You",
            WizardStep::FullReport => "Full Report",
        }
    }

    /// How far through the sequence this step is, as a whole percentage.
    pub fn progress_percent(self) -> u8 {
        (((self.index() + 1) * 100) / Self::ALL.len()) as u8
    }
}

impl fmt::Display for WizardStep {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Whether the fields a step collects are all present and in range.
///
/// Presentation steps (Results onward) are always complete; they hold no
/// inputs of their own.
pub fn is_step_complete(
    step: WizardStep,
    form: &FormState,
    config: &PlanConfig,
) -> bool {
    match step {
        WizardStep::Mode => true,
        WizardStep::Amount => match form.investment_mode {
            InvestmentMode::Sip => is_valid_amount(&form.sip_amount, config),
            InvestmentMode::Lumpsum => is_valid_amount(&form.lumpsum_amount, config),
            InvestmentMode::Both => {
                is_valid_amount(&form.sip_amount, config)
                    && is_valid_amount(&form.lumpsum_amount, config)
            }
        },
        WizardStep::EmergencyFund => form.has_emergency_fund.is_some(),
        WizardStep::Goals => form.goals.iter().all(|goal| {
            !goal.name.trim().is_empty()
                && is_valid_amount(&goal.time_frame_years, config)
                && is_valid_amount(&goal.target_amount, config)
        }),
        WizardStep::Insurance => {
            form.has_health_insurance.is_some() && form.has_life_insurance.is_some()
        }
        WizardStep::TaxRetirement => {
            form.wants_tax_saving.is_some()
                && form.wants_retirement.is_some()
                && (form.wants_retirement != Some(true)
                    || is_valid_amount(&form.monthly_expenses, config))
        }
        WizardStep::Results | WizardStep::ThankYou | WizardStep::FullReport => true,
    }
}
