//! Planning assumptions shared by the projection engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when validating a [`PlanConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanConfigError {
    /// The assumed annual return rate must be in (0, 1].
    #[error("annual return rate must be between 0 and 1, got {0}")]
    InvalidReturnRate(Decimal),

    /// The post-retirement horizon must be at least one year.
    #[error("retirement horizon must be at least one year, got {0}")]
    InvalidRetirementYears(u32),

    /// The numeric-range bounds must satisfy `0 < min <= max`.
    #[error("amount bounds must satisfy 0 < min <= max, got [{0}, {1}]")]
    InvalidAmountBounds(Decimal, Decimal),
}

/// Assumptions and limits used across projections and validation.
///
/// These are deliberately simple: a single flat annual return is assumed for
/// every instrument, and the retirement corpus covers a fixed number of
/// post-retirement years with no inflation adjustment.
///
/// # Example
///
/// ```
/// use plan_core::models::PlanConfig;
///
/// let config = PlanConfig::default();
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.retirement_years, 25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Assumed flat annual return across all projections. Default 12%.
    pub annual_return_rate: Decimal,

    /// Years of post-retirement life the corpus must fund. Default 25.
    pub retirement_years: u32,

    /// Lower bound (inclusive) for every bounded numeric field. Default 1.
    pub min_amount: Decimal,

    /// Upper bound (inclusive) for every bounded numeric field.
    /// Default 100,000,000.
    pub max_amount: Decimal,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            annual_return_rate: Decimal::new(12, 2),
            retirement_years: 25,
            min_amount: Decimal::ONE,
            max_amount: Decimal::from(100_000_000_i64),
        }
    }
}

impl PlanConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`PlanConfigError`] if:
    /// - `annual_return_rate` is not in (0, 1]
    /// - `retirement_years` is zero
    /// - the amount bounds do not satisfy `0 < min <= max`
    pub fn validate(&self) -> Result<(), PlanConfigError> {
        if self.annual_return_rate <= Decimal::ZERO || self.annual_return_rate > Decimal::ONE {
            return Err(PlanConfigError::InvalidReturnRate(self.annual_return_rate));
        }
        if self.retirement_years == 0 {
            return Err(PlanConfigError::InvalidRetirementYears(
                self.retirement_years,
            ));
        }
        if self.min_amount <= Decimal::ZERO || self.min_amount > self.max_amount {
            return Err(PlanConfigError::InvalidAmountBounds(
                self.min_amount,
                self.max_amount,
            ));
        }
        Ok(())
    }
}
