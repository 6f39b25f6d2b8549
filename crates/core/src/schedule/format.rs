//! Date rendering and calendar helpers.

use chrono::{Datelike, Month, NaiveDate};
use emitrack_shared::config::DateStyle;
use serde::Serialize;

use super::clock::Clock;

/// One entry of a month picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthOption {
    /// Full English month name.
    pub label: &'static str,
    /// Month number, 1 for January.
    pub value: u32,
}

/// Renders a date numerically, DD/MM/YYYY by default.
#[must_use]
pub fn format_date(date: NaiveDate, style: DateStyle) -> String {
    let pattern = match style {
        DateStyle::DayMonthYear => "%d/%m/%Y",
        DateStyle::MonthDayYear => "%m/%d/%Y",
        DateStyle::Iso => "%Y-%m-%d",
    };
    date.format(pattern).to_string()
}

/// Renders a date as "Month YYYY" (e.g., "October 2026").
#[must_use]
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Full English name of the date's month.
#[must_use]
pub fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string()
}

/// Name of the current month according to `clock`.
pub fn current_month(clock: &impl Clock) -> String {
    month_name(clock.today())
}

/// Current calendar year according to `clock`.
pub fn current_year(clock: &impl Clock) -> i32 {
    clock.today().year()
}

/// The twelve months in calendar order.
#[must_use]
pub fn month_options() -> Vec<MonthOption> {
    std::iter::successors(Some(Month::January), |month| {
        (*month != Month::December).then(|| month.succ())
    })
    .map(|month| MonthOption {
        label: month.name(),
        value: month.number_from_month(),
    })
    .collect()
}
