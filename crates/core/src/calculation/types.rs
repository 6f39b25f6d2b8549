//! Calculation result types.

use rust_decimal::Decimal;
use serde::Serialize;

use super::health::FinancialHealth;

/// Salary against EMI obligations, as shown on the health card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinancialSummary {
    /// Monthly salary.
    pub salary: Decimal,
    /// Sum of every loan's EMI, paid or not.
    pub total_emi: Decimal,
    /// Salary minus total EMI. Negative when over-leveraged.
    pub remaining_balance: Decimal,
    /// Total EMI as a percentage of salary. Zero when salary is zero.
    pub debt_to_income_ratio: Decimal,
    /// Classification of the ratio.
    pub health: FinancialHealth,
    /// Suggested monthly savings out of the remaining balance.
    pub recommended_savings: Decimal,
}

/// Split of the salary into EMIs, savings and spending money.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetAllocation {
    /// Sum of every loan's EMI.
    pub total_emi: Decimal,
    /// Suggested savings.
    pub recommended_savings: Decimal,
    /// Remaining balance minus recommended savings.
    pub disposable_income: Decimal,
    /// EMI share of salary in percent.
    pub emi_percent: Decimal,
    /// Savings share of salary in percent.
    pub savings_percent: Decimal,
    /// Disposable share of salary in percent.
    pub disposable_percent: Decimal,
}
