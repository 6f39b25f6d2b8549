//! Loan, salary and portfolio records.

pub mod types;

pub use types::{Loan, LoanPatch, MonthlyBudget, NewLoan, Owner, Portfolio, SalaryInfo};
