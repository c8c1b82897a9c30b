pub mod form_state;
pub mod plan_config;
pub mod result_snapshot;

pub use form_state::{ContactInfo, FormState, Goal, InvestmentMode};
pub use plan_config::{PlanConfig, PlanConfigError};
pub use result_snapshot::{GoalProjection, PortfolioAllocation, ResultSnapshot};
