//! Risk level bands and their static metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Five ordered risk tolerance bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Very Low")]
    VeryLow,
    #[serde(rename = "Low")]
    Low,
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "High")]
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    /// All levels in ascending order of risk.
    pub const ALL: [RiskLevel; 5] = [
        RiskLevel::VeryLow,
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::VeryHigh,
    ];

    /// Band for any score. Each lower bound is inclusive:
    /// - VeryLow: score < 20
    /// - Low: 20-39
    /// - Medium: 40-59
    /// - High: 60-79
    /// - VeryHigh: score >= 80
    pub fn from_score(score: i64) -> Self {
        if score < 20 {
            Self::VeryLow
        } else if score < 40 {
            Self::Low
        } else if score < 60 {
            Self::Medium
        } else if score < 80 {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    /// Rank from 1 (very low) to 5 (very high).
    pub fn numeric(&self) -> u8 {
        match self {
            Self::VeryLow => 1,
            Self::Low => 2,
            Self::Medium => 3,
            Self::High => 4,
            Self::VeryHigh => 5,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::VeryLow => "Conservative investor",
            Self::Low => "Cautious investor",
            Self::Medium => "Balanced investor",
            Self::High => "Aggressive investor",
            Self::VeryHigh => "Speculative investor",
        }
    }

    pub fn recommendations(&self) -> &'static [&'static str; 3] {
        match self {
            Self::VeryLow => &[
                "You prefer stable, predictable returns",
                "Suitable for government bonds and fixed deposits",
                "Lower potential returns but minimal risk of loss",
            ],
            Self::Low => &[
                "You prefer some stability with modest growth",
                "Suitable for conservative mutual funds and bonds",
                "Moderate returns with low risk tolerance",
            ],
            Self::Medium => &[
                "You're comfortable with balanced risk and return",
                "Suitable for diversified portfolios and balanced funds",
                "Good growth potential with manageable risk",
            ],
            Self::High => &[
                "You're willing to take risks for higher returns",
                "Suitable for growth stocks and equity funds",
                "High growth potential but more volatile",
            ],
            Self::VeryHigh => &[
                "You're comfortable with significant volatility",
                "Suitable for speculative investments and startups",
                "Highest growth potential but substantial risk",
            ],
        }
    }

    pub fn profile(&self) -> RiskLevelProfile {
        RiskLevelProfile {
            level: *self,
            label: self.label(),
            numeric: self.numeric(),
            description: self.description(),
            recommendations: self.recommendations(),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for RiskLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::invalid_format("risk_level", format!("unknown risk level '{}'", s))
            })
    }
}

/// A risk level together with its display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskLevelProfile {
    #[serde(skip)]
    pub level: RiskLevel,
    #[serde(rename = "level")]
    pub label: &'static str,
    pub numeric: u8,
    pub description: &'static str,
    pub recommendations: &'static [&'static str; 3],
}

/// Level record for any score. Never fails.
pub fn get_risk_level(score: i64) -> RiskLevelProfile {
    RiskLevel::from_score(score).profile()
}

/// Just the level label, e.g. `"Very High"`.
pub fn get_risk_level_string(score: i64) -> &'static str {
    RiskLevel::from_score(score).label()
}

/// Just the level rank, 1-5.
pub fn get_risk_level_numeric(score: i64) -> u8 {
    RiskLevel::from_score(score).numeric()
}
