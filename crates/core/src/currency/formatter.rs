//! Locale-aware currency formatting.
//!
//! Amounts are rounded half away from zero to the configured number of
//! fractional digits, grouped per locale, and prefixed with the currency
//! symbol. Negative amounts put the sign before the symbol (`-₹500`).

use emitrack_shared::DisplayConfig;
use rust_decimal::{Decimal, RoundingStrategy};

/// How integer digits are separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitGrouping {
    /// Last three digits, then pairs: `22,00,000`.
    Indian,
    /// Groups of three: `2,200,000`.
    Thousands,
}

impl DigitGrouping {
    /// Picks the grouping used by a BCP 47 locale tag.
    #[must_use]
    pub fn for_locale(locale: &str) -> Self {
        let region = locale.rsplit(['-', '_']).next().unwrap_or_default();
        if locale.contains(['-', '_']) && region.eq_ignore_ascii_case("IN") {
            Self::Indian
        } else {
            Self::Thousands
        }
    }

    const fn group_width(self) -> usize {
        match self {
            Self::Indian => 2,
            Self::Thousands => 3,
        }
    }
}

/// Formats decimal amounts as currency strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    symbol: String,
    decimal_places: u32,
    grouping: DigitGrouping,
}

impl CurrencyFormatter {
    /// Creates a formatter.
    #[must_use]
    pub fn new(symbol: impl Into<String>, decimal_places: u32, grouping: DigitGrouping) -> Self {
        Self {
            symbol: symbol.into(),
            decimal_places,
            grouping,
        }
    }

    /// Creates the formatter described by the display configuration.
    #[must_use]
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self::new(
            config.symbol(),
            config.decimal_places,
            DigitGrouping::for_locale(&config.locale),
        )
    }

    /// Formats `amount`.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use emitrack_core::currency::{CurrencyFormatter, DigitGrouping};
    ///
    /// let inr = CurrencyFormatter::new("₹", 0, DigitGrouping::Indian);
    /// assert_eq!(inr.format(dec!(2200000)), "₹22,00,000");
    /// ```
    #[must_use]
    pub fn format(&self, amount: Decimal) -> String {
        let rounded =
            amount.round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        let precision = self.decimal_places as usize;
        let plain = format!("{:.precision$}", rounded.abs());
        let (integer, fraction) = match plain.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (plain.as_str(), None),
        };

        let mut out = format!("{sign}{}{}", self.symbol, group_digits(integer, self.grouping));
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

/// Formats `amount` with the display configuration.
#[must_use]
pub fn format_currency(amount: Decimal, config: &DisplayConfig) -> String {
    CurrencyFormatter::from_config(config).format(amount)
}

fn group_digits(digits: &str, grouping: DigitGrouping) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let width = grouping.group_width();
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(width);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}
