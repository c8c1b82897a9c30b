//! Shared helpers for projection calculations.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

/// Rounds a projected value, half away from zero, to whole currency units.
///
/// Values beyond the [`Decimal`] range saturate instead of panicking; with
/// the published input bounds this only happens for absurd horizons.
pub fn round_to_unit(value: f64) -> Decimal {
    Decimal::from_f64(value.round()).unwrap_or(Decimal::MAX)
}

/// Lossy conversion for growth-factor arithmetic.
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Formats a whole-unit amount with Indian digit grouping: the last three
/// digits form one group, every group above that has two digits.
///
/// ```
/// use plan_core::calculations::common::format_inr;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_inr(dec!(15000000)), "1,50,00,000");
/// assert_eq!(format_inr(dec!(1000)), "1,000");
/// assert_eq!(format_inr(dec!(100)), "100");
/// ```
pub fn format_inr(value: Decimal) -> String {
    let digits = value.trunc().abs().normalize().to_string();
    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };

    if digits.len() <= 3 {
        return format!("{sign}{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{sign}{},{tail}", groups.join(","))
}
