//! Business rule validation for portfolio records.

use rust_decimal::Decimal;

use super::error::PortfolioError;
use crate::loan::{Loan, SalaryInfo};

/// Valid days of the month for due days and paydays.
const DAY_RANGE: std::ops::RangeInclusive<u32> = 1..=31;

/// Validates a loan before it is stored.
///
/// # Errors
///
/// Returns the first rule the loan violates.
pub fn validate_loan(loan: &Loan) -> Result<(), PortfolioError> {
    if loan.name.trim().is_empty() {
        return Err(PortfolioError::EmptyName);
    }

    require_positive("total_amount", loan.total_amount)?;
    require_positive("emi_amount", loan.emi_amount)?;
    require_non_negative("interest_rate", loan.interest_rate)?;
    require_non_negative("remaining_amount", loan.remaining_amount)?;

    if loan.remaining_amount > loan.total_amount {
        return Err(PortfolioError::RemainingExceedsTotal {
            remaining: loan.remaining_amount,
            total: loan.total_amount,
        });
    }

    require_day("due_day", loan.due_day)?;

    if loan.end_date < loan.start_date {
        return Err(PortfolioError::EndBeforeStart);
    }

    Ok(())
}

/// Validates salary details.
///
/// # Errors
///
/// Returns an error for a non-positive amount or a payday outside 1-31.
pub fn validate_salary(salary: &SalaryInfo) -> Result<(), PortfolioError> {
    require_positive("salary", salary.amount)?;
    require_day("payday", salary.payday)
}

fn require_positive(field: &'static str, value: Decimal) -> Result<(), PortfolioError> {
    if value <= Decimal::ZERO {
        return Err(PortfolioError::NonPositiveAmount { field, value });
    }
    Ok(())
}

fn require_non_negative(field: &'static str, value: Decimal) -> Result<(), PortfolioError> {
    if value < Decimal::ZERO {
        return Err(PortfolioError::NegativeAmount { field, value });
    }
    Ok(())
}

fn require_day(field: &'static str, value: u32) -> Result<(), PortfolioError> {
    if !DAY_RANGE.contains(&value) {
        return Err(PortfolioError::InvalidDay { field, value });
    }
    Ok(())
}
