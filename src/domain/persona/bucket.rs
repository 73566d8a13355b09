//! Income-based persona classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::income::MonthlyIncome;

/// Persona bucket used to select budget and goal guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersonaBucket {
    /// Below the early-career floor; receives general guidance.
    General,
    EarlyCareer,
    FamilyBusiness,
    SeniorExecutive,
}

impl PersonaBucket {
    pub fn title(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::EarlyCareer => "Early Career",
            Self::FamilyBusiness => "Family & Business",
            Self::SeniorExecutive => "Senior Executive",
        }
    }

    pub fn for_income(income: &MonthlyIncome) -> Self {
        PersonaThresholds::CANONICAL.classify(income.value())
    }
}

impl fmt::Display for PersonaBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Lower bounds (inclusive) of each non-general bucket, in KES per month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonaThresholds {
    pub early_career: f64,
    pub family_business: f64,
    pub senior_executive: f64,
}

impl PersonaThresholds {
    /// The single threshold table used across onboarding.
    pub const CANONICAL: Self = Self {
        early_career: 50_000.0,
        family_business: 100_000.0,
        senior_executive: 150_000.0,
    };

    /// Buckets a positive income. Boundary values belong to the higher bucket.
    pub fn classify(&self, monthly_income: f64) -> PersonaBucket {
        if monthly_income >= self.senior_executive {
            PersonaBucket::SeniorExecutive
        } else if monthly_income >= self.family_business {
            PersonaBucket::FamilyBusiness
        } else if monthly_income >= self.early_career {
            PersonaBucket::EarlyCareer
        } else {
            PersonaBucket::General
        }
    }
}

/// Classifies a raw monthly income.
///
/// Returns `None` for zero, negative or non-finite income: no persona is
/// inferred until an income has been entered.
pub fn classify_persona(monthly_income: f64) -> Option<PersonaBucket> {
    if !monthly_income.is_finite() || monthly_income <= 0.0 {
        return None;
    }
    Some(PersonaThresholds::CANONICAL.classify(monthly_income))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_band() {
        assert_eq!(classify_persona(30_000.0), Some(PersonaBucket::General));
        assert_eq!(classify_persona(75_000.0), Some(PersonaBucket::EarlyCareer));
        assert_eq!(classify_persona(120_000.0), Some(PersonaBucket::FamilyBusiness));
        assert_eq!(classify_persona(400_000.0), Some(PersonaBucket::SeniorExecutive));
    }

    #[test]
    fn boundaries_belong_to_higher_bucket() {
        assert_eq!(classify_persona(49_999.99), Some(PersonaBucket::General));
        assert_eq!(classify_persona(50_000.0), Some(PersonaBucket::EarlyCareer));
        assert_eq!(classify_persona(99_999.0), Some(PersonaBucket::EarlyCareer));
        assert_eq!(classify_persona(100_000.0), Some(PersonaBucket::FamilyBusiness));
        assert_eq!(classify_persona(149_999.0), Some(PersonaBucket::FamilyBusiness));
        assert_eq!(classify_persona(150_000.0), Some(PersonaBucket::SeniorExecutive));
    }

    #[test]
    fn no_persona_without_positive_income() {
        assert_eq!(classify_persona(0.0), None);
        assert_eq!(classify_persona(-10_000.0), None);
        assert_eq!(classify_persona(f64::NAN), None);
        assert_eq!(classify_persona(f64::INFINITY), None);
    }

    #[test]
    fn for_income_uses_canonical_table() {
        let income = MonthlyIncome::try_new(100_000.0).unwrap();
        assert_eq!(PersonaBucket::for_income(&income), PersonaBucket::FamilyBusiness);
    }

    #[test]
    fn serializes_in_kebab_case() {
        assert_eq!(
            serde_json::to_string(&PersonaBucket::SeniorExecutive).unwrap(),
            "\"senior-executive\""
        );
        let parsed: PersonaBucket = serde_json::from_str("\"early-career\"").unwrap();
        assert_eq!(parsed, PersonaBucket::EarlyCareer);
    }
}
