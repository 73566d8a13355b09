//! Monthly income value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Lowest monthly income accepted during onboarding.
pub const MIN_PLAUSIBLE_INCOME: f64 = 1_000.0;

/// Highest monthly income accepted during onboarding.
pub const MAX_PLAUSIBLE_INCOME: f64 = 10_000_000.0;

/// A validated monthly income in KES.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct MonthlyIncome(f64);

impl MonthlyIncome {
    /// Validates an income entered on the financial information step.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(
                "monthly_income",
                "must be a finite number",
            ));
        }
        if value <= 0.0 {
            return Err(ValidationError::empty_field("monthly_income"));
        }
        if value < MIN_PLAUSIBLE_INCOME {
            return Err(ValidationError::implausible(
                "monthly_income",
                "monthly income seems too low",
            ));
        }
        if value > MAX_PLAUSIBLE_INCOME {
            return Err(ValidationError::implausible(
                "monthly_income",
                "monthly income seems unrealistically high",
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn annual(&self) -> f64 {
        self.0 * 12.0
    }

    /// Validates a monthly expense line against this income.
    pub fn validate_expense(
        &self,
        field: &str,
        amount: f64,
    ) -> Result<(), ValidationError> {
        if !amount.is_finite() {
            return Err(ValidationError::invalid_format(field, "must be a finite number"));
        }
        if amount < 0.0 {
            return Err(ValidationError::implausible(field, "amount cannot be negative"));
        }
        if amount > self.0 {
            return Err(ValidationError::implausible(
                field,
                "cannot exceed monthly income",
            ));
        }
        Ok(())
    }
}

impl TryFrom<f64> for MonthlyIncome {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<MonthlyIncome> for f64 {
    fn from(income: MonthlyIncome) -> Self {
        income.0
    }
}

impl fmt::Display for MonthlyIncome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KES {:.0}", self.0)
    }
}
