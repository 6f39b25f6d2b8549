//! End-to-end dashboard scenario: one salary, two loans, a fixed "today".

use chrono::NaiveDate;
use emitrack_core::calculation::{EmiCalculator, HealthStatus};
use emitrack_core::currency::CurrencyFormatter;
use emitrack_core::loan::{NewLoan, Owner, SalaryInfo};
use emitrack_core::portfolio::LoanPortfolio;
use emitrack_core::schedule::{
    Clock, DueSchedule, EmiStatus, FixedClock, current_month, current_year, format_date,
    format_month_year,
};
use emitrack_shared::DisplayConfig;
use emitrack_shared::types::UserId;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn demo_portfolio() -> LoanPortfolio {
    let mut portfolio = LoanPortfolio::new(
        Owner {
            id: UserId::new(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        },
        SalaryInfo {
            amount: dec!(85000),
            payday: 1,
        },
    );
    portfolio
        .add_loan(NewLoan {
            name: "Home Loan".to_string(),
            total_amount: dec!(2500000),
            interest_rate: dec!(7.5),
            emi_amount: dec!(22000),
            start_date: date(2023, 1, 15),
            end_date: date(2033, 1, 15),
            due_day: 15,
        })
        .unwrap();
    portfolio
        .add_loan(NewLoan {
            name: "Car Loan".to_string(),
            total_amount: dec!(800000),
            interest_rate: dec!(8.5),
            emi_amount: dec!(15000),
            start_date: date(2023, 3, 10),
            end_date: date(2028, 3, 10),
            due_day: 10,
        })
        .unwrap();
    portfolio
}

#[test]
fn health_card_for_two_loans() {
    let portfolio = demo_portfolio();

    let summary = portfolio.summary();

    assert_eq!(summary.total_emi, dec!(37000));
    assert_eq!(summary.remaining_balance, dec!(48000));
    assert_eq!(summary.debt_to_income_ratio.round_dp(2), dec!(43.53));
    assert_eq!(summary.health.status, HealthStatus::Poor);
    assert_eq!(summary.recommended_savings, dec!(9600));

    let formatter = CurrencyFormatter::from_config(&DisplayConfig::default());
    assert_eq!(formatter.format(summary.total_emi), "₹37,000");
    assert_eq!(formatter.format(summary.remaining_balance), "₹48,000");
}

#[test]
fn paying_an_overdue_emi_moves_it_to_the_end() {
    let mut portfolio = demo_portfolio();
    let clock = FixedClock(date(2026, 10, 12));
    let schedule = DueSchedule::default();

    let rows = portfolio.upcoming_emis(&schedule, clock.today());
    assert_eq!(rows[0].name, "Home Loan");
    assert_eq!(rows[0].status, EmiStatus::SoonDue { days: 3 });
    assert_eq!(rows[1].name, "Car Loan");
    assert_eq!(rows[1].status, EmiStatus::Overdue);

    let car_loan = rows[1].loan_id;
    portfolio.mark_emi_paid(car_loan, clock.today()).unwrap();

    let rows = portfolio.upcoming_emis(&schedule, clock.today());
    assert_eq!(rows[1].loan_id, car_loan);
    assert_eq!(rows[1].status, EmiStatus::Paid);
    assert_eq!(
        portfolio.loan(car_loan).unwrap().last_paid_date,
        Some(date(2026, 10, 12))
    );
}

#[test]
fn monthly_budget_recorded_once() {
    let mut portfolio = demo_portfolio();
    let clock = FixedClock(date(2026, 10, 15));

    assert!(portfolio.record_current_budget(clock.today()));
    assert!(!portfolio.record_current_budget(clock.today()));

    let budget = &portfolio.budgets()[0];
    assert_eq!(budget.month, current_month(&clock));
    assert_eq!(budget.year, current_year(&clock));
    assert_eq!(budget.remaining_balance, dec!(48000));
}

#[test]
fn loan_progress_and_dates() {
    let portfolio = demo_portfolio();
    let loan = &portfolio.loans()[0];

    assert_eq!(
        EmiCalculator::loan_progress(loan.total_amount, loan.remaining_amount),
        dec!(0)
    );
    assert_eq!(
        format_date(loan.start_date, DisplayConfig::default().date_style),
        "15/01/2023"
    );
    assert_eq!(format_month_year(loan.end_date), "January 2033");
}
