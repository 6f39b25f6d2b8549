//! Loan portfolio service.
//!
//! `LoanPortfolio` is the single owner of a user's loans, salary and recorded
//! budgets. Callers hold it by value or `&mut` and every mutation goes through
//! a validated method; the calculation and schedule modules only ever read
//! from it.

use chrono::{Datelike, NaiveDate};
use emitrack_shared::types::LoanId;
use tracing::{debug, info};

use super::error::PortfolioError;
use super::types::UpcomingEmi;
use super::validation::{validate_loan, validate_salary};
use crate::calculation::{BudgetAllocation, EmiCalculator, FinancialSummary};
use crate::loan::{Loan, LoanPatch, MonthlyBudget, NewLoan, Owner, Portfolio, SalaryInfo};
use crate::schedule::{DueSchedule, EmiStatus, month_name};

/// Owned, mutable loan portfolio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanPortfolio {
    portfolio: Portfolio,
}

impl LoanPortfolio {
    /// Creates an empty portfolio.
    #[must_use]
    pub fn new(owner: Owner, salary: SalaryInfo) -> Self {
        Self::from_portfolio(Portfolio {
            owner,
            salary,
            loans: Vec::new(),
            budgets: Vec::new(),
        })
    }

    /// Wraps an existing portfolio (e.g., one read from disk).
    #[must_use]
    pub const fn from_portfolio(portfolio: Portfolio) -> Self {
        Self { portfolio }
    }

    /// Releases the underlying records.
    #[must_use]
    pub fn into_inner(self) -> Portfolio {
        self.portfolio
    }

    /// Read access to the underlying records.
    #[must_use]
    pub const fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Portfolio owner.
    #[must_use]
    pub const fn owner(&self) -> &Owner {
        &self.portfolio.owner
    }

    /// Current salary.
    #[must_use]
    pub const fn salary(&self) -> &SalaryInfo {
        &self.portfolio.salary
    }

    /// Loans in insertion order.
    #[must_use]
    pub fn loans(&self) -> &[Loan] {
        &self.portfolio.loans
    }

    /// Recorded monthly budgets, oldest first.
    #[must_use]
    pub fn budgets(&self) -> &[MonthlyBudget] {
        &self.portfolio.budgets
    }

    /// Looks up a loan by ID.
    #[must_use]
    pub fn loan(&self, id: LoanId) -> Option<&Loan> {
        self.portfolio.loans.iter().find(|loan| loan.id == id)
    }

    /// Adds a loan with a fresh ID, full principal outstanding and unpaid.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the loan breaks a business rule.
    pub fn add_loan(&mut self, new_loan: NewLoan) -> Result<LoanId, PortfolioError> {
        let id = LoanId::new();
        let loan = new_loan.into_loan(id);
        validate_loan(&loan)?;

        info!(
            loan_id = %id,
            name = %loan.name,
            total_amount = %loan.total_amount,
            emi_amount = %loan.emi_amount,
            due_day = loan.due_day,
            "Loan added"
        );
        self.portfolio.loans.push(loan);
        Ok(id)
    }

    /// Applies a partial update to a loan.
    ///
    /// The loan is left untouched if the result would be invalid.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::LoanNotFound` for an unknown ID, or a
    /// validation error if the updated loan breaks a business rule.
    pub fn update_loan(&mut self, id: LoanId, patch: &LoanPatch) -> Result<&Loan, PortfolioError> {
        let index = self.position(id)?;
        let updated = patch.apply_to(&self.portfolio.loans[index]);
        validate_loan(&updated)?;

        info!(loan_id = %id, "Loan updated");
        self.portfolio.loans[index] = updated;
        Ok(&self.portfolio.loans[index])
    }

    /// Removes a loan and returns it.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::LoanNotFound` for an unknown ID.
    pub fn delete_loan(&mut self, id: LoanId) -> Result<Loan, PortfolioError> {
        let index = self.position(id)?;
        let loan = self.portfolio.loans.remove(index);

        info!(loan_id = %id, name = %loan.name, "Loan deleted");
        Ok(loan)
    }

    /// Replaces the salary details.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-positive amount or bad payday.
    pub fn update_salary(&mut self, salary: SalaryInfo) -> Result<(), PortfolioError> {
        validate_salary(&salary)?;

        info!(amount = %salary.amount, payday = salary.payday, "Salary updated");
        self.portfolio.salary = salary;
        Ok(())
    }

    /// Marks the current installment of a loan as paid on `today`.
    ///
    /// The outstanding principal is not changed.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::LoanNotFound` for an unknown ID.
    pub fn mark_emi_paid(&mut self, id: LoanId, today: NaiveDate) -> Result<&Loan, PortfolioError> {
        let index = self.position(id)?;
        let loan = &mut self.portfolio.loans[index];
        loan.is_paid = true;
        loan.last_paid_date = Some(today);

        info!(loan_id = %id, emi_amount = %loan.emi_amount, paid_on = %today, "EMI marked as paid");
        Ok(loan)
    }

    /// Builds the budget snapshot for the month containing `today`.
    #[must_use]
    pub fn generate_monthly_budget(&self, today: NaiveDate) -> MonthlyBudget {
        let salary = self.portfolio.salary.amount;
        let total_emi = EmiCalculator::total_emi(&self.portfolio.loans);

        MonthlyBudget {
            month: month_name(today),
            year: today.year(),
            salary,
            total_emi,
            remaining_balance: EmiCalculator::remaining_balance(salary, total_emi),
            is_paid: false,
        }
    }

    /// Records this month's budget unless one already exists for the same
    /// month and year. Returns true if a budget was added.
    pub fn record_current_budget(&mut self, today: NaiveDate) -> bool {
        let budget = self.generate_monthly_budget(today);
        let exists = self
            .portfolio
            .budgets
            .iter()
            .any(|existing| existing.month == budget.month && existing.year == budget.year);
        if exists {
            debug!(month = %budget.month, year = budget.year, "Monthly budget already recorded");
            return false;
        }

        info!(
            month = %budget.month,
            year = budget.year,
            total_emi = %budget.total_emi,
            remaining_balance = %budget.remaining_balance,
            "Monthly budget recorded"
        );
        self.portfolio.budgets.push(budget);
        true
    }

    /// Health card figures for the current loans and salary.
    #[must_use]
    pub fn summary(&self) -> FinancialSummary {
        EmiCalculator::summary(&self.portfolio.loans, &self.portfolio.salary)
    }

    /// Salary split into EMIs, savings and disposable income.
    #[must_use]
    pub fn allocation(&self) -> BudgetAllocation {
        EmiCalculator::allocation(&self.portfolio.loans, &self.portfolio.salary)
    }

    /// Installments ordered for display: unpaid first, soonest due first;
    /// paid loans follow in insertion order.
    #[must_use]
    pub fn upcoming_emis(&self, schedule: &DueSchedule, today: NaiveDate) -> Vec<UpcomingEmi> {
        let mut rows: Vec<UpcomingEmi> = self
            .portfolio
            .loans
            .iter()
            .map(|loan| UpcomingEmi {
                loan_id: loan.id,
                name: loan.name.clone(),
                emi_amount: loan.emi_amount,
                due_date: schedule.next_due_date(loan.due_day, today),
                days_remaining: schedule.days_remaining(loan.due_day, today),
                status: schedule.emi_status(loan, today),
            })
            .collect();

        rows.sort_by_key(|row| {
            let is_paid = row.status == EmiStatus::Paid;
            (is_paid, if is_paid { 0 } else { row.days_remaining })
        });
        rows
    }

    fn position(&self, id: LoanId) -> Result<usize, PortfolioError> {
        self.portfolio
            .loans
            .iter()
            .position(|loan| loan.id == id)
            .ok_or_else(|| {
                debug!(loan_id = %id, "Loan lookup missed");
                PortfolioError::LoanNotFound(id)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::HealthStatus;
    use emitrack_shared::types::UserId;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn owner() -> Owner {
        Owner {
            id: UserId::new(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        }
    }

    fn new_loan(name: &str, emi_amount: Decimal, due_day: u32) -> NewLoan {
        NewLoan {
            name: name.to_string(),
            total_amount: dec!(800000),
            interest_rate: dec!(8.5),
            emi_amount,
            start_date: date(2023, 3, 10),
            end_date: date(2028, 3, 10),
            due_day,
        }
    }

    fn portfolio() -> LoanPortfolio {
        LoanPortfolio::new(
            owner(),
            SalaryInfo {
                amount: dec!(85000),
                payday: 1,
            },
        )
    }

    #[test]
    fn test_add_loan() {
        let mut portfolio = portfolio();
        let id = portfolio
            .add_loan(new_loan("Car Loan", dec!(15000), 10))
            .unwrap();

        let loan = portfolio.loan(id).unwrap();
        assert_eq!(loan.remaining_amount, dec!(800000));
        assert!(!loan.is_paid);
        assert_eq!(portfolio.loans().len(), 1);
    }

    #[test]
    fn test_add_invalid_loan_leaves_portfolio_unchanged() {
        let mut portfolio = portfolio();
        let result = portfolio.add_loan(new_loan("Car Loan", dec!(15000), 32));

        assert!(matches!(result, Err(PortfolioError::InvalidDay { .. })));
        assert!(portfolio.loans().is_empty());
    }

    #[test]
    fn test_update_loan() {
        let mut portfolio = portfolio();
        let id = portfolio
            .add_loan(new_loan("Car Loan", dec!(15000), 10))
            .unwrap();
        let patch = LoanPatch {
            remaining_amount: Some(dec!(600000)),
            due_day: Some(12),
            ..LoanPatch::default()
        };

        let loan = portfolio.update_loan(id, &patch).unwrap();

        assert_eq!(loan.remaining_amount, dec!(600000));
        assert_eq!(loan.due_day, 12);
        assert_eq!(loan.name, "Car Loan");
    }

    #[test]
    fn test_rejected_update_keeps_old_values() {
        let mut portfolio = portfolio();
        let id = portfolio
            .add_loan(new_loan("Car Loan", dec!(15000), 10))
            .unwrap();
        let patch = LoanPatch {
            remaining_amount: Some(dec!(900000)),
            ..LoanPatch::default()
        };

        let result = portfolio.update_loan(id, &patch);

        assert!(matches!(
            result,
            Err(PortfolioError::RemainingExceedsTotal { .. })
        ));
        assert_eq!(portfolio.loan(id).unwrap().remaining_amount, dec!(800000));
    }

    #[test]
    fn test_unknown_loan_is_not_found() {
        let mut portfolio = portfolio();
        let missing = LoanId::new();

        assert!(matches!(
            portfolio.update_loan(missing, &LoanPatch::default()),
            Err(PortfolioError::LoanNotFound(id)) if id == missing
        ));
        assert!(matches!(
            portfolio.delete_loan(missing),
            Err(PortfolioError::LoanNotFound(_))
        ));
        assert!(matches!(
            portfolio.mark_emi_paid(missing, date(2026, 10, 15)),
            Err(PortfolioError::LoanNotFound(_))
        ));
    }

    #[test]
    fn test_delete_loan_preserves_order() {
        let mut portfolio = portfolio();
        let first = portfolio.add_loan(new_loan("A", dec!(1000), 1)).unwrap();
        let second = portfolio.add_loan(new_loan("B", dec!(2000), 2)).unwrap();
        let third = portfolio.add_loan(new_loan("C", dec!(3000), 3)).unwrap();

        let removed = portfolio.delete_loan(second).unwrap();

        assert_eq!(removed.name, "B");
        let ids: Vec<LoanId> = portfolio.loans().iter().map(|loan| loan.id).collect();
        assert_eq!(ids, vec![first, third]);
    }

    #[test]
    fn test_mark_emi_paid() {
        let mut portfolio = portfolio();
        let id = portfolio
            .add_loan(new_loan("Car Loan", dec!(15000), 10))
            .unwrap();
        let today = date(2026, 10, 11);

        let loan = portfolio.mark_emi_paid(id, today).unwrap();

        assert!(loan.is_paid);
        assert_eq!(loan.last_paid_date, Some(today));
        assert_eq!(loan.remaining_amount, dec!(800000));
    }

    #[test]
    fn test_update_salary() {
        let mut portfolio = portfolio();
        let salary = SalaryInfo {
            amount: dec!(95000),
            payday: 28,
        };

        portfolio.update_salary(salary).unwrap();
        assert_eq!(*portfolio.salary(), salary);

        let invalid = SalaryInfo {
            amount: dec!(-1),
            payday: 28,
        };
        assert!(portfolio.update_salary(invalid).is_err());
        assert_eq!(*portfolio.salary(), salary);
    }

    #[test]
    fn test_generate_monthly_budget() {
        let mut portfolio = portfolio();
        portfolio
            .add_loan(new_loan("Home Loan", dec!(22000), 15))
            .unwrap();
        portfolio
            .add_loan(new_loan("Car Loan", dec!(15000), 10))
            .unwrap();

        let budget = portfolio.generate_monthly_budget(date(2026, 10, 15));

        assert_eq!(budget.month, "October");
        assert_eq!(budget.year, 2026);
        assert_eq!(budget.salary, dec!(85000));
        assert_eq!(budget.total_emi, dec!(37000));
        assert_eq!(budget.remaining_balance, dec!(48000));
        assert!(!budget.is_paid);
    }

    #[test]
    fn test_record_current_budget_once_per_month() {
        let mut portfolio = portfolio();

        assert!(portfolio.record_current_budget(date(2026, 10, 1)));
        assert!(!portfolio.record_current_budget(date(2026, 10, 31)));
        assert!(portfolio.record_current_budget(date(2026, 11, 1)));
        assert!(portfolio.record_current_budget(date(2027, 10, 1)));
        assert_eq!(portfolio.budgets().len(), 3);
    }

    #[test]
    fn test_summary_and_allocation() {
        let mut portfolio = portfolio();
        portfolio
            .add_loan(new_loan("Home Loan", dec!(22000), 15))
            .unwrap();
        portfolio
            .add_loan(new_loan("Car Loan", dec!(15000), 10))
            .unwrap();

        let summary = portfolio.summary();
        assert_eq!(summary.health.status, HealthStatus::Poor);
        assert_eq!(summary.recommended_savings, dec!(9600));

        let allocation = portfolio.allocation();
        assert_eq!(allocation.disposable_income, dec!(38400));
    }

    #[test]
    fn test_upcoming_emis_order() {
        let mut portfolio = portfolio();
        let paid_early = portfolio.add_loan(new_loan("Paid A", dec!(1000), 3)).unwrap();
        let late = portfolio.add_loan(new_loan("Late", dec!(2000), 28)).unwrap();
        let paid_late = portfolio.add_loan(new_loan("Paid B", dec!(1000), 20)).unwrap();
        let soon = portfolio.add_loan(new_loan("Soon", dec!(3000), 17)).unwrap();
        let overdue = portfolio.add_loan(new_loan("Overdue", dec!(4000), 10)).unwrap();
        let today = date(2026, 10, 15);
        portfolio.mark_emi_paid(paid_early, today).unwrap();
        portfolio.mark_emi_paid(paid_late, today).unwrap();

        let rows = portfolio.upcoming_emis(&DueSchedule::default(), today);

        let order: Vec<LoanId> = rows.iter().map(|row| row.loan_id).collect();
        assert_eq!(order, vec![soon, late, overdue, paid_early, paid_late]);
        assert_eq!(rows[0].status, EmiStatus::SoonDue { days: 2 });
        assert_eq!(rows[1].status, EmiStatus::Upcoming { days: 13 });
        assert_eq!(rows[2].status, EmiStatus::Overdue);
        assert_eq!(rows[2].due_date, date(2026, 11, 10));
        assert_eq!(rows[3].status, EmiStatus::Paid);
    }

    #[test]
    fn test_into_inner_round_trips() {
        let mut portfolio = portfolio();
        portfolio.add_loan(new_loan("A", dec!(1000), 1)).unwrap();
        let snapshot = portfolio.clone().into_inner();

        assert_eq!(LoanPortfolio::from_portfolio(snapshot), portfolio);
    }
}
