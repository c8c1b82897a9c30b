//! Rule-based advisory messages.
//!
//! A fixed, ordered list of rules runs over the form; each rule whose
//! condition holds appends one fixed message. Rules are independent, so
//! anywhere from zero to six messages may result, always in rule order.
//! An unanswered yes/no question counts as "not confirmed" for the
//! protection rules, which keeps preview output conservative.

use rust_decimal::Decimal;

use crate::calculations::common::format_inr;
use crate::models::FormState;

pub const EMERGENCY_FUND_ADVICE: &str =
    "Build an emergency fund of 6 months' expenses before investing heavily";

pub const HEALTH_INSURANCE_ADVICE: &str =
    "Consider getting health insurance for financial protection";

pub const LIFE_INSURANCE_ADVICE: &str = "Secure life insurance to protect your financial goals";

pub const TAX_SAVING_ADVICE: &str =
    "Allocate investments to ELSS funds, PPF, and NPS for tax benefits";

pub const RETIREMENT_FUND_ADVICE: &str =
    "Start a dedicated retirement fund with a mix of equity and debt";

/// The corpus-sizing message, with the amount in Indian digit grouping.
pub fn retirement_corpus_advice(corpus: Decimal) -> String {
    format!(
        "Build a retirement corpus of ₹{} based on your current monthly expenses",
        format_inr(corpus)
    )
}

/// Evaluates every rule against the form, in fixed order.
///
/// `retirement_corpus` is the already-computed corpus; it only affects
/// whether the corpus-sizing message is appended after the retirement-fund
/// message.
pub fn evaluate(
    form: &FormState,
    retirement_corpus: Decimal,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if form.has_emergency_fund != Some(true) {
        recommendations.push(EMERGENCY_FUND_ADVICE.to_string());
    }
    if form.has_health_insurance != Some(true) {
        recommendations.push(HEALTH_INSURANCE_ADVICE.to_string());
    }
    if form.has_life_insurance != Some(true) && !form.goals.is_empty() {
        recommendations.push(LIFE_INSURANCE_ADVICE.to_string());
    }
    if form.wants_tax_saving == Some(true) {
        recommendations.push(TAX_SAVING_ADVICE.to_string());
    }
    if form.wants_retirement == Some(true) {
        recommendations.push(RETIREMENT_FUND_ADVICE.to_string());
        if retirement_corpus > Decimal::ZERO {
            recommendations.push(retirement_corpus_advice(retirement_corpus));
        }
    }

    recommendations
}
