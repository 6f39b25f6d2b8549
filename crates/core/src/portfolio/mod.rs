//! Owned loan portfolio with validated mutations.

pub mod error;
pub mod service;
pub mod types;
pub mod validation;

pub use error::PortfolioError;
pub use service::LoanPortfolio;
pub use types::UpcomingEmi;
pub use validation::{validate_loan, validate_salary};
