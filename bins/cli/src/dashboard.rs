//! Plain-text rendering of a portfolio dashboard.

use std::fmt::Write;

use chrono::NaiveDate;
use emitrack_core::calculation::EmiCalculator;
use emitrack_core::currency::CurrencyFormatter;
use emitrack_core::portfolio::LoanPortfolio;
use emitrack_core::schedule::{DueSchedule, format_date, format_month_year};
use emitrack_shared::DateStyle;
use rust_decimal::Decimal;

/// Everything needed to turn numbers into text.
pub struct Renderer<'a> {
    /// Amount formatter.
    pub formatter: &'a CurrencyFormatter,
    /// Numeric date layout.
    pub date_style: DateStyle,
    /// Due-date policy.
    pub schedule: &'a DueSchedule,
}

impl Renderer<'_> {
    /// Writes the full dashboard for `today` into `out`.
    pub fn render(
        &self,
        out: &mut impl Write,
        portfolio: &LoanPortfolio,
        today: NaiveDate,
    ) -> std::fmt::Result {
        let money = |amount: Decimal| self.formatter.format(amount);

        writeln!(out, "Emitrack dashboard, {}", format_month_year(today))?;
        writeln!(out, "Owner: {}", portfolio.owner().name)?;
        writeln!(out)?;

        let summary = portfolio.summary();
        writeln!(out, "Financial health")?;
        writeln!(out, "  {:<22}{}", "Monthly salary", money(summary.salary))?;
        writeln!(out, "  {:<22}{}", "Total EMI", money(summary.total_emi))?;
        writeln!(
            out,
            "  {:<22}{}",
            "Remaining balance",
            money(summary.remaining_balance)
        )?;
        writeln!(
            out,
            "  {:<22}{:.2}% [{}]",
            "Debt-to-income ratio",
            summary.debt_to_income_ratio.round_dp(2),
            summary.health.status
        )?;
        writeln!(out, "  {}", summary.health.message)?;
        writeln!(out)?;

        let allocation = portfolio.allocation();
        writeln!(out, "Budget allocation")?;
        for (label, amount, percent) in [
            ("EMIs", allocation.total_emi, allocation.emi_percent),
            (
                "Recommended savings",
                allocation.recommended_savings,
                allocation.savings_percent,
            ),
            (
                "Disposable income",
                allocation.disposable_income,
                allocation.disposable_percent,
            ),
        ] {
            writeln!(
                out,
                "  {label:<22}{:<14}({:.2}%)",
                money(amount),
                percent.round_dp(2)
            )?;
        }
        writeln!(out)?;

        writeln!(out, "Loans")?;
        if portfolio.loans().is_empty() {
            writeln!(out, "  No loans recorded")?;
        }
        for loan in portfolio.loans() {
            let progress = EmiCalculator::loan_progress(loan.total_amount, loan.remaining_amount);
            writeln!(
                out,
                "  {:<22}{} of {} left, {progress}% repaid, ends {}",
                loan.name,
                money(loan.remaining_amount),
                money(loan.total_amount),
                format_date(loan.end_date, self.date_style)
            )?;
        }
        writeln!(out)?;

        writeln!(out, "Upcoming EMIs")?;
        for row in portfolio.upcoming_emis(self.schedule, today) {
            let marker = if row.status.needs_attention() { "!" } else { " " };
            writeln!(
                out,
                "{marker} {:<22}{:<14}{}  {}",
                row.name,
                money(row.emi_amount),
                format_date(row.due_date, self.date_style),
                row.status
            )?;
        }

        if !portfolio.budgets().is_empty() {
            writeln!(out)?;
            writeln!(out, "Budget history")?;
            for budget in portfolio.budgets() {
                writeln!(
                    out,
                    "  {} {}: salary {}, EMI {}, left {}",
                    budget.month,
                    budget.year,
                    money(budget.salary),
                    money(budget.total_emi),
                    money(budget.remaining_balance)
                )?;
            }
        }

        Ok(())
    }
}
