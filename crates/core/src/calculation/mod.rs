//! Financial formulas over loans and salary.

pub mod health;
pub mod service;
pub mod types;


pub use health::{FinancialHealth, HealthStatus};
pub use service::{EmiCalculator, round_half_up};
pub use types::{BudgetAllocation, FinancialSummary};
