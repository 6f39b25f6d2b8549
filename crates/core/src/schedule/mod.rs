//! Calendar arithmetic for recurring monthly due days, plus date rendering.

pub mod clock;
pub mod due;
pub mod format;


pub use clock::{Clock, FixedClock, SystemClock};
pub use due::{DueSchedule, EmiStatus, days_in_month, first_of_month};
pub use format::{
    MonthOption, current_month, current_year, format_date, format_month_year, month_name,
    month_options,
};
