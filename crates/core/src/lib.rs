//! Core EMI and budget logic for Emitrack.
//!
//! This crate contains pure business logic with ZERO file, network or
//! database dependencies. Loan records, the financial formulas over them,
//! due-date arithmetic and the portfolio service that owns the records
//! all live here.
//!
//! # Modules
//!
//! - `loan` - Loan, salary and portfolio records
//! - `calculation` - EMI totals, debt-to-income ratio, health status, progress
//! - `schedule` - Due-date arithmetic, EMI status and date rendering
//! - `currency` - Locale-aware currency formatting
//! - `portfolio` - Owned loan portfolio with validated mutations

pub mod calculation;
pub mod currency;
pub mod loan;
pub mod portfolio;
pub mod schedule;
