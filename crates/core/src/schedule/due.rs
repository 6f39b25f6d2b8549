//! Due-date arithmetic for monthly installments.
//!
//! A due day (1-31) carries no month or year: the installment recurs every
//! month. All functions take `today` explicitly so they stay pure.

use chrono::{Datelike, Days, Months, NaiveDate, TimeDelta};
use emitrack_shared::config::{DueDayOverflow, ScheduleConfig};
use serde::Serialize;

use crate::loan::Loan;

/// Default number of days ahead an EMI counts as "soon due".
pub const DEFAULT_SOON_DUE_WINDOW_DAYS: i64 = 5;

/// Display state of a loan's current installment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EmiStatus {
    /// Installment settled for the month.
    Paid,
    /// Due day has passed this month and the installment is unpaid.
    Overdue,
    /// Due within the soon-due window (due today does not count).
    SoonDue {
        /// Days until the due date.
        days: i64,
    },
    /// Due later.
    Upcoming {
        /// Days until the due date.
        days: i64,
    },
}

impl EmiStatus {
    /// Short label for list rows.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Paid => "Paid".to_string(),
            Self::Overdue => "Overdue".to_string(),
            Self::SoonDue { days } | Self::Upcoming { days } => format!("Due in {days} days"),
        }
    }

    /// True for states that should draw the user's attention.
    #[must_use]
    pub const fn needs_attention(&self) -> bool {
        matches!(self, Self::Overdue | Self::SoonDue { .. })
    }
}

impl std::fmt::Display for EmiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Resolves due days to calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueSchedule {
    overflow: DueDayOverflow,
    soon_due_window_days: i64,
}

impl Default for DueSchedule {
    fn default() -> Self {
        Self::new(DueDayOverflow::Clamp, DEFAULT_SOON_DUE_WINDOW_DAYS)
    }
}

impl DueSchedule {
    /// Creates a schedule with an explicit overflow policy and window.
    #[must_use]
    pub const fn new(overflow: DueDayOverflow, soon_due_window_days: i64) -> Self {
        Self {
            overflow,
            soon_due_window_days,
        }
    }

    /// Creates a schedule from configuration.
    #[must_use]
    pub const fn from_config(config: &ScheduleConfig) -> Self {
        Self::new(config.due_day_overflow, config.soon_due_window_days)
    }

    /// Policy applied to due days past the end of a month.
    #[must_use]
    pub const fn overflow(&self) -> DueDayOverflow {
        self.overflow
    }

    /// Number of days ahead an EMI counts as soon due.
    #[must_use]
    pub const fn soon_due_window_days(&self) -> i64 {
        self.soon_due_window_days
    }

    /// The date `due_day` falls on in the month starting at `month_start`.
    ///
    /// With `Clamp`, days past the month's end land on its last day. With
    /// `RollOver`, they continue into the following month.
    #[must_use]
    pub fn resolve_in_month(&self, month_start: NaiveDate, due_day: u32) -> NaiveDate {
        debug_assert_eq!(month_start.day(), 1);
        debug_assert!((1..=31).contains(&due_day), "due day out of range: {due_day}");

        match self.overflow {
            DueDayOverflow::Clamp => {
                let day = due_day.clamp(1, days_in_month(month_start));
                month_start + Days::new(u64::from(day - 1))
            }
            DueDayOverflow::RollOver => month_start + TimeDelta::days(i64::from(due_day) - 1),
        }
    }

    /// Next occurrence of `due_day` on or after the start of today's month.
    ///
    /// If `due_day` is before today's day of month, the occurrence is in next
    /// month; otherwise it is in the current month, even when that is today.
    #[must_use]
    pub fn next_due_date(&self, due_day: u32, today: NaiveDate) -> NaiveDate {
        let current_month = first_of_month(today);
        let month_start = if due_day < today.day() {
            current_month + Months::new(1)
        } else {
            current_month
        };
        self.resolve_in_month(month_start, due_day)
    }

    /// Whole days from `today` until the next occurrence of `due_day`.
    ///
    /// Zero when due today.
    #[must_use]
    pub fn days_remaining(&self, due_day: u32, today: NaiveDate) -> i64 {
        (self.next_due_date(due_day, today) - today).num_days()
    }

    /// True if the EMI is due within the window but not today.
    #[must_use]
    pub fn is_emi_soon_due(&self, due_day: u32, today: NaiveDate) -> bool {
        let days = self.days_remaining(due_day, today);
        days > 0 && days <= self.soon_due_window_days
    }

    /// True if unpaid and today's day of month is past `due_day`.
    ///
    /// Only the day of month is compared: on the 1st, a due day late in the
    /// previous month is not reported overdue.
    #[must_use]
    pub fn is_emi_overdue(due_day: u32, is_paid: bool, today: NaiveDate) -> bool {
        if is_paid {
            return false;
        }
        today.day() > due_day
    }

    /// Status of a loan's current installment.
    #[must_use]
    pub fn emi_status(&self, loan: &Loan, today: NaiveDate) -> EmiStatus {
        if loan.is_paid {
            return EmiStatus::Paid;
        }
        if Self::is_emi_overdue(loan.due_day, loan.is_paid, today) {
            return EmiStatus::Overdue;
        }

        let days = self.days_remaining(loan.due_day, today);
        if self.is_emi_soon_due(loan.due_day, today) {
            EmiStatus::SoonDue { days }
        } else {
            EmiStatus::Upcoming { days }
        }
    }
}

/// First day of the month containing `date`.
#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Number of days in the month starting at `month_start`.
#[must_use]
pub fn days_in_month(month_start: NaiveDate) -> u32 {
    let next_month = month_start + Months::new(1);
    // At most 31, always fits.
    u32::try_from((next_month - month_start).num_days()).unwrap_or(31)
}
