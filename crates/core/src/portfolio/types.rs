//! Portfolio view types.

use chrono::NaiveDate;
use emitrack_shared::types::LoanId;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::schedule::EmiStatus;

/// One row of the upcoming-EMI list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingEmi {
    /// Loan the installment belongs to.
    pub loan_id: LoanId,
    /// Loan display name.
    pub name: String,
    /// Installment amount.
    pub emi_amount: Decimal,
    /// Next date the installment falls on.
    pub due_date: NaiveDate,
    /// Days until `due_date`.
    pub days_remaining: i64,
    /// Display state.
    pub status: EmiStatus,
}
