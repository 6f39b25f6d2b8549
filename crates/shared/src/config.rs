//! Application configuration management.

use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::types::Currency;

/// Highest number of fractional digits a formatted amount may carry.
pub const MAX_DECIMAL_PLACES: u32 = 4;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Display (locale and formatting) configuration.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Due-date scheduling configuration.
    #[serde(default)]
    pub schedule: ScheduleConfig,
    /// Portfolio file configuration.
    #[serde(default)]
    pub portfolio: PortfolioConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How amounts and dates are rendered.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// BCP 47 locale tag (e.g., "en-IN"). Decides digit grouping.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Currency amounts are expressed in.
    #[serde(default = "default_currency")]
    pub currency: Currency,
    /// Overrides the currency's own symbol when set.
    #[serde(default)]
    pub currency_symbol: Option<String>,
    /// Fractional digits shown for amounts.
    #[serde(default)]
    pub decimal_places: u32,
    /// Numeric date layout.
    #[serde(default)]
    pub date_style: DateStyle,
}

fn default_locale() -> String {
    "en-IN".to_string()
}

const fn default_currency() -> Currency {
    Currency::Inr
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            currency: default_currency(),
            currency_symbol: None,
            decimal_places: 0,
            date_style: DateStyle::default(),
        }
    }
}

impl DisplayConfig {
    /// Returns the symbol to print in front of amounts.
    #[must_use]
    pub fn symbol(&self) -> &str {
        self.currency_symbol
            .as_deref()
            .unwrap_or_else(|| self.currency.symbol())
    }
}

/// Numeric date layout used by `format_date`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateStyle {
    /// DD/MM/YYYY
    #[default]
    DayMonthYear,
    /// MM/DD/YYYY
    MonthDayYear,
    /// YYYY-MM-DD
    Iso,
}

/// What a due day that does not exist in the target month resolves to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueDayOverflow {
    /// Use the last day of the month (31 in February is the 28th/29th).
    #[default]
    Clamp,
    /// Carry the excess days into the next month (31 in February is 3 March).
    RollOver,
}

/// Due-date scheduling configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// An unpaid EMI due within this many days (and not today) is "soon due".
    #[serde(default = "default_soon_due_window")]
    pub soon_due_window_days: i64,
    /// Policy for due days past the end of the month.
    #[serde(default)]
    pub due_day_overflow: DueDayOverflow,
    /// IANA timezone used to decide "today". Local time when absent.
    #[serde(default)]
    pub timezone: Option<String>,
}

const fn default_soon_due_window() -> i64 {
    5
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            soon_due_window_days: default_soon_due_window(),
            due_day_overflow: DueDayOverflow::default(),
            timezone: None,
        }
    }
}

impl ScheduleConfig {
    /// Parses the configured timezone.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the name is not a known IANA timezone.
    pub fn tz(&self) -> AppResult<Option<Tz>> {
        self.timezone
            .as_deref()
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|_| AppError::Config(format!("Unknown timezone: {name}")))
            })
            .transpose()
    }
}

/// Portfolio file configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortfolioConfig {
    /// Path of the JSON portfolio file.
    #[serde(default)]
    pub path: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "emitrack=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or fails validation.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("EMITRACK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but make no sense.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` describing the first invalid value.
    pub fn validate(&self) -> AppResult<()> {
        if self.display.decimal_places > MAX_DECIMAL_PLACES {
            return Err(AppError::Config(format!(
                "display.decimal_places must be at most {MAX_DECIMAL_PLACES}, got {}",
                self.display.decimal_places
            )));
        }

        if self.schedule.soon_due_window_days < 1 {
            return Err(AppError::Config(format!(
                "schedule.soon_due_window_days must be positive, got {}",
                self.schedule.soon_due_window_days
            )));
        }

        self.schedule.tz()?;
        Ok(())
    }
}
