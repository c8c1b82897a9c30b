//! Field-level validation rules.
//!
//! Two parsing disciplines live here. Gating (`is_valid_amount`) is strict:
//! a field must parse and land inside the configured range before a step may
//! advance. The engine-side helpers (`amount_or_zero`, `years_or_zero`) are
//! lenient and degrade bad input to zero, so projections can run safely over
//! half-entered forms for live previews.

use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::warn;

use crate::models::PlanConfig;

/// Normalizes input for amount parsing: trims whitespace and removes commas
/// (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a raw amount string into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,50,000"`). Returns `None`
/// for empty or whitespace-only input, or when parsing fails (logged at
/// `warn`).
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return None;
    }
    normalized.parse().map_or_else(
        |e| {
            warn!(input = %s, "invalid amount: {}", e);
            None
        },
        Some,
    )
}

/// Engine-side lenient parse: empty or invalid input degrades to zero.
pub fn amount_or_zero(s: &str) -> Decimal {
    parse_amount(s).unwrap_or(Decimal::ZERO)
}

/// Engine-side lenient horizon parse in whole years.
///
/// Fractional years are truncated; empty, invalid, or out-of-range input
/// degrades to zero years.
pub fn years_or_zero(s: &str) -> u32 {
    parse_amount(s)
        .and_then(|d| d.trunc().to_u32())
        .unwrap_or(0)
}

/// Returns `true` when `value` lies inside the configured inclusive bounds.
pub fn is_in_range(
    value: Decimal,
    config: &PlanConfig,
) -> bool {
    value >= config.min_amount && value <= config.max_amount
}

/// The gating rule for every bounded numeric field: the raw string must
/// parse and land inside `[config.min_amount, config.max_amount]`.
pub fn is_valid_amount(
    s: &str,
    config: &PlanConfig,
) -> bool {
    parse_amount(s).is_some_and(|value| is_in_range(value, config))
}

fn email_pattern() -> &'static Regex {
    static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("email pattern is a valid regex")
    })
}

/// Returns `true` when `s` looks like a deliverable email address
/// (local part, host, and a top-level domain of at least two characters).
pub fn is_valid_email(s: &str) -> bool {
    email_pattern().is_match(s)
}
