//! Source of "today" for due-date arithmetic.

use chrono::{Local, NaiveDate, Utc};
use chrono_tz::Tz;
use emitrack_shared::config::ScheduleConfig;
use emitrack_shared::AppResult;

/// Provides the current calendar date.
pub trait Clock {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock date, either in the host's local timezone or a fixed one.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    tz: Option<Tz>,
}

impl SystemClock {
    /// Clock in the host's local timezone.
    #[must_use]
    pub const fn local() -> Self {
        Self { tz: None }
    }

    /// Clock in the given IANA timezone.
    #[must_use]
    pub const fn in_timezone(tz: Tz) -> Self {
        Self { tz: Some(tz) }
    }

    /// Builds the clock described by the schedule configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the configured timezone is unknown.
    pub fn from_config(config: &ScheduleConfig) -> AppResult<Self> {
        Ok(Self { tz: config.tz()? })
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.tz {
            Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
            None => Local::now().date_naive(),
        }
    }
}

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_its_date() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn test_from_config_rejects_unknown_timezone() {
        let config = ScheduleConfig {
            timezone: Some("Nowhere/Special".to_string()),
            ..ScheduleConfig::default()
        };
        assert!(SystemClock::from_config(&config).is_err());
    }

    #[test]
    fn test_timezones_agree_within_a_day() {
        let east = SystemClock::in_timezone(chrono_tz::Pacific::Kiritimati).today();
        let west = SystemClock::in_timezone(chrono_tz::Pacific::Pago_Pago).today();
        let gap = (east - west).num_days();
        assert!((0..=2).contains(&gap));
    }
}
