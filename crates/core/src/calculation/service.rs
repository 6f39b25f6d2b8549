//! EMI, budget and loan progress formulas.
//!
//! Every function is total: the two divisions by a possibly-zero base
//! (salary and loan principal) return zero instead of failing.

use rust_decimal::Decimal;

use super::health::FinancialHealth;
use super::types::{BudgetAllocation, FinancialSummary};
use crate::loan::{Loan, SalaryInfo};

/// Share of the remaining balance suggested as savings (20%).
const SAVINGS_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// Upper bound of a loan's completion percentage.
const MAX_PROGRESS: Decimal = Decimal::ONE_HUNDRED;

/// Stateless calculator for EMI and budget figures.
pub struct EmiCalculator;

impl EmiCalculator {
    /// Sum of `emi_amount` across all loans, regardless of paid state.
    ///
    /// ```
    /// use emitrack_core::calculation::EmiCalculator;
    ///
    /// assert!(EmiCalculator::total_emi(&[]).is_zero());
    /// ```
    #[must_use]
    pub fn total_emi(loans: &[Loan]) -> Decimal {
        loans.iter().map(|loan| loan.emi_amount).sum()
    }

    /// Salary left after EMIs. Not clamped, so it goes negative when the
    /// EMIs exceed the salary.
    #[must_use]
    pub fn remaining_balance(salary: Decimal, total_emi: Decimal) -> Decimal {
        salary - total_emi
    }

    /// Total EMI as a percentage of salary.
    ///
    /// Returns zero when `salary` is zero.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use emitrack_core::calculation::EmiCalculator;
    ///
    /// assert_eq!(EmiCalculator::debt_to_income_ratio(dec!(50), dec!(200)), dec!(25));
    /// assert_eq!(EmiCalculator::debt_to_income_ratio(dec!(50), dec!(0)), dec!(0));
    /// ```
    #[must_use]
    pub fn debt_to_income_ratio(total_emi: Decimal, salary: Decimal) -> Decimal {
        if salary.is_zero() {
            return Decimal::ZERO;
        }
        total_emi / salary * Decimal::ONE_HUNDRED
    }

    /// Classifies a debt-to-income ratio.
    #[must_use]
    pub fn health_status(ratio: Decimal) -> FinancialHealth {
        FinancialHealth::from_ratio(ratio)
    }

    /// Whole-number percentage of the principal already repaid, capped at 100.
    ///
    /// Returns zero when `total_amount` is zero. No lower bound is applied,
    /// so a remaining amount above the total yields a negative percentage.
    #[must_use]
    pub fn loan_progress(total_amount: Decimal, remaining_amount: Decimal) -> Decimal {
        if total_amount.is_zero() {
            return Decimal::ZERO;
        }
        let paid_amount = total_amount - remaining_amount;
        let percent = round_half_up(paid_amount / total_amount * Decimal::ONE_HUNDRED);
        percent.min(MAX_PROGRESS)
    }

    /// 20% of the remaining balance, rounded to a whole amount.
    /// Negative balances give negative savings.
    #[must_use]
    pub fn recommended_savings(remaining_balance: Decimal) -> Decimal {
        round_half_up(remaining_balance * SAVINGS_RATE)
    }

    /// Computes every health card figure in one pass.
    #[must_use]
    pub fn summary(loans: &[Loan], salary: &SalaryInfo) -> FinancialSummary {
        let total_emi = Self::total_emi(loans);
        let remaining_balance = Self::remaining_balance(salary.amount, total_emi);
        let debt_to_income_ratio = Self::debt_to_income_ratio(total_emi, salary.amount);

        FinancialSummary {
            salary: salary.amount,
            total_emi,
            remaining_balance,
            debt_to_income_ratio,
            health: Self::health_status(debt_to_income_ratio),
            recommended_savings: Self::recommended_savings(remaining_balance),
        }
    }

    /// Splits the salary into EMIs, recommended savings and disposable income.
    ///
    /// All percentages are zero when the salary is zero.
    #[must_use]
    pub fn allocation(loans: &[Loan], salary: &SalaryInfo) -> BudgetAllocation {
        let total_emi = Self::total_emi(loans);
        let remaining_balance = Self::remaining_balance(salary.amount, total_emi);
        let recommended_savings = Self::recommended_savings(remaining_balance);
        let disposable_income = remaining_balance - recommended_savings;

        BudgetAllocation {
            total_emi,
            recommended_savings,
            disposable_income,
            emi_percent: share_of(total_emi, salary.amount),
            savings_percent: share_of(recommended_savings, salary.amount),
            disposable_percent: share_of(disposable_income, salary.amount),
        }
    }
}

/// Rounds to the nearest integer, resolving .5 towards positive infinity
/// (2.5 becomes 3, -2.5 becomes -2).
#[must_use]
pub fn round_half_up(value: Decimal) -> Decimal {
    (value + Decimal::new(5, 1)).floor()
}

fn share_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        part / whole * Decimal::ONE_HUNDRED
    }
}
