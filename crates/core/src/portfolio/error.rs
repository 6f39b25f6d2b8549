//! Portfolio error types.

use emitrack_shared::AppError;
use emitrack_shared::types::LoanId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by portfolio mutations.
#[derive(Debug, Error)]
pub enum PortfolioError {
    /// Loan not found.
    #[error("Loan not found: {0}")]
    LoanNotFound(LoanId),

    /// Loan name is empty or whitespace.
    #[error("Loan name is required")]
    EmptyName,

    /// Amount must be greater than zero.
    #[error("{field} must be greater than zero, got {value}")]
    NonPositiveAmount {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: Decimal,
    },

    /// Amount cannot be negative.
    #[error("{field} cannot be negative, got {value}")]
    NegativeAmount {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: Decimal,
    },

    /// Outstanding principal exceeds the original principal.
    #[error("Remaining amount ({remaining}) exceeds total amount ({total})")]
    RemainingExceedsTotal {
        /// Outstanding principal.
        remaining: Decimal,
        /// Original principal.
        total: Decimal,
    },

    /// Day of month outside 1-31.
    #[error("{field} must be a day between 1 and 31, got {value}")]
    InvalidDay {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: u32,
    },

    /// End date precedes start date.
    #[error("End date must not be before start date")]
    EndBeforeStart,
}

impl From<PortfolioError> for AppError {
    fn from(err: PortfolioError) -> Self {
        match err {
            PortfolioError::LoanNotFound(_) => Self::NotFound(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}
