//! Built-in sample portfolio used when no file is given.

use anyhow::Context;
use chrono::NaiveDate;
use emitrack_core::loan::{LoanPatch, NewLoan, Owner, SalaryInfo};
use emitrack_core::portfolio::LoanPortfolio;
use emitrack_shared::types::UserId;
use rust_decimal::Decimal;

/// A salaried user with a home loan and an already-paid car loan.
pub fn demo_portfolio() -> anyhow::Result<LoanPortfolio> {
    let mut portfolio = LoanPortfolio::new(
        Owner {
            id: UserId::new(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        },
        SalaryInfo {
            amount: Decimal::from(85_000),
            payday: 1,
        },
    );

    let home = portfolio.add_loan(NewLoan {
        name: "Home Loan".to_string(),
        total_amount: Decimal::from(2_500_000),
        interest_rate: Decimal::new(75, 1),
        emi_amount: Decimal::from(22_000),
        start_date: ymd(2023, 1, 15)?,
        end_date: ymd(2033, 1, 15)?,
        due_day: 15,
    })?;
    portfolio.update_loan(
        home,
        &LoanPatch {
            remaining_amount: Some(Decimal::from(2_200_000)),
            ..LoanPatch::default()
        },
    )?;

    let car = portfolio.add_loan(NewLoan {
        name: "Car Loan".to_string(),
        total_amount: Decimal::from(800_000),
        interest_rate: Decimal::new(85, 1),
        emi_amount: Decimal::from(15_000),
        start_date: ymd(2023, 3, 10)?,
        end_date: ymd(2028, 3, 10)?,
        due_day: 10,
    })?;
    portfolio.update_loan(
        car,
        &LoanPatch {
            remaining_amount: Some(Decimal::from(600_000)),
            is_paid: Some(true),
            last_paid_date: Some(Some(ymd(2023, 5, 10)?)),
            ..LoanPatch::default()
        },
    )?;

    Ok(portfolio)
}

fn ymd(year: i32, month: u32, day: u32) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("Invalid calendar date {year}-{month:02}-{day:02}"))
}
