//! Core domain logic for the investment-planning questionnaire: the data
//! model, field validation rules, future-value projection engine,
//! rule-based recommendations, and the result assembler.
//!
//! Wizard sequencing lives in `plan-wizard`; contact persistence lives in
//! `plan-store`. This crate has no I/O.

pub mod calculations;
pub mod models;
pub mod validation;

pub use calculations::{ProjectionEngine, ResultAssembler};
pub use models::{
    ContactInfo, FormState, Goal, GoalProjection, InvestmentMode, PlanConfig, PlanConfigError,
    PortfolioAllocation, ResultSnapshot,
};
