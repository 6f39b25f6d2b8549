//! Financial health classification from the debt-to-income ratio.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Five-tier classification of a debt-to-income ratio.
///
/// Each tier covers ratios up to and including its upper bound, so a ratio
/// of exactly 20 is still `Excellent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Ratio <= 20.
    Excellent,
    /// Ratio <= 30.
    Good,
    /// Ratio <= 40.
    Fair,
    /// Ratio <= 50.
    Poor,
    /// Ratio > 50.
    Critical,
}

impl HealthStatus {
    /// Classifies a debt-to-income ratio given in percent.
    #[must_use]
    pub fn from_ratio(ratio: Decimal) -> Self {
        if ratio <= Decimal::from(20) {
            Self::Excellent
        } else if ratio <= Decimal::from(30) {
            Self::Good
        } else if ratio <= Decimal::from(40) {
            Self::Fair
        } else if ratio <= Decimal::from(50) {
            Self::Poor
        } else {
            Self::Critical
        }
    }

    /// Display color as a hex string.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Excellent => "#10B981",
            Self::Good => "#6EE7B7",
            Self::Fair => "#FBBF24",
            Self::Poor => "#F97316",
            Self::Critical => "#EF4444",
        }
    }

    /// Guidance shown to the user.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Your debt level is well-managed!",
            Self::Good => "Your debt level is healthy.",
            Self::Fair => "Your debt level is moderate.",
            Self::Poor => "Your debt level is high. Consider reducing expenses.",
            Self::Critical => "Your debt level is very high. Seek financial advice.",
        }
    }

    /// Lowercase name as used in serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status together with its display color and message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinancialHealth {
    /// Tier.
    pub status: HealthStatus,
    /// Hex display color.
    pub color: &'static str,
    /// Human-readable guidance.
    pub message: &'static str,
}

impl FinancialHealth {
    /// Classifies a ratio and attaches the tier's color and message.
    #[must_use]
    pub fn from_ratio(ratio: Decimal) -> Self {
        Self::from(HealthStatus::from_ratio(ratio))
    }
}

impl From<HealthStatus> for FinancialHealth {
    fn from(status: HealthStatus) -> Self {
        Self {
            status,
            color: status.color(),
            message: status.message(),
        }
    }
}
