//! Currency amount rendering.

pub mod formatter;

pub use formatter::{CurrencyFormatter, DigitGrouping, format_currency};
