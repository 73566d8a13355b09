//! Comprehensive risk score blending questionnaire answers with profile factors.

use serde::{Deserialize, Serialize};

use super::questionnaire::QuestionnaireResponse;
use super::score::RiskScore;

const QUESTIONNAIRE_WEIGHT: f64 = 0.50;
const AGE_WEIGHT: f64 = 0.20;
const INCOME_WEIGHT: f64 = 0.20;
const HORIZON_WEIGHT: f64 = 0.10;

/// Age at which the age factor reaches zero.
const AGE_CEILING: f64 = 60.0;
/// Annual income at which the income factor saturates.
const INCOME_CEILING: f64 = 200_000.0;
/// Horizon in years at which the horizon factor saturates.
const HORIZON_CEILING: f64 = 30.0;

const DEPENDENT_PENALTY: f64 = 0.01;
const MAX_DEPENDENT_PENALTY: f64 = 0.10;

/// Profile attributes that adjust the questionnaire score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileFactors {
    pub age: u32,
    pub annual_income: f64,
    pub dependents: u32,
    pub horizon_years: u32,
}

impl RiskScore {
    /// Blends a validated response with profile factors into a 0-100 score.
    pub fn comprehensive(response: &QuestionnaireResponse, factors: &ProfileFactors) -> Self {
        let answers = response.answers();
        let mean = answers.iter().map(|&a| f64::from(a)).sum::<f64>() / answers.len() as f64;
        let questionnaire = unit((mean - 1.0) / 3.0);

        let age = unit((AGE_CEILING - f64::from(factors.age)) / AGE_CEILING);
        let income = if factors.annual_income.is_finite() {
            unit(factors.annual_income / INCOME_CEILING)
        } else {
            0.0
        };
        let horizon = unit(f64::from(factors.horizon_years) / HORIZON_CEILING);
        let dependents =
            -(DEPENDENT_PENALTY * f64::from(factors.dependents)).min(MAX_DEPENDENT_PENALTY);

        let total = questionnaire * QUESTIONNAIRE_WEIGHT
            + age * AGE_WEIGHT
            + income * INCOME_WEIGHT
            + horizon * HORIZON_WEIGHT
            + dependents;

        let percent = (total * 100.0).clamp(0.0, 100.0);
        Self::new(percent.round_ties_even() as i64)
    }
}

/// Comprehensive score for raw answers.
///
/// Returns `None` unless the answers pass questionnaire validation.
pub fn calculate_comprehensive_risk_score(
    answers: &[i64],
    factors: &ProfileFactors,
) -> Option<RiskScore> {
    let response = QuestionnaireResponse::try_new(answers).ok()?;
    Some(RiskScore::comprehensive(&response, factors))
}

fn unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factors(age: u32, annual_income: f64, dependents: u32, horizon_years: u32) -> ProfileFactors {
        ProfileFactors {
            age,
            annual_income,
            dependents,
            horizon_years,
        }
    }

    fn score(answers: &[i64], factors: ProfileFactors) -> i64 {
        calculate_comprehensive_risk_score(answers, &factors)
            .unwrap()
            .value()
    }

    #[test]
    fn most_conservative_profile_scores_zero() {
        assert_eq!(score(&[1, 1, 1, 1, 1], factors(60, 0.0, 0, 0)), 0);
    }

    #[test]
    fn most_aggressive_profile_scores_one_hundred() {
        assert_eq!(score(&[4, 4, 4, 4, 4], factors(0, 200_000.0, 0, 30)), 100);
    }

    #[test]
    fn factors_are_blended_by_weight() {
        // 0.50 * 2/3 + 0.20 * 0.5 + 0.20 * 0.5 + 0.10 * 0.5 = 0.5833
        assert_eq!(score(&[3, 3, 3, 3, 3], factors(30, 100_000.0, 0, 15)), 58);
    }

    #[test]
    fn age_past_ceiling_contributes_nothing() {
        let at_sixty = score(&[2, 2, 2, 2, 2], factors(60, 50_000.0, 0, 10));
        let at_eighty = score(&[2, 2, 2, 2, 2], factors(80, 50_000.0, 0, 10));
        assert_eq!(at_sixty, at_eighty);
    }

    #[test]
    fn income_and_horizon_saturate() {
        let at_ceiling = score(&[4, 4, 4, 4, 4], factors(0, 200_000.0, 0, 30));
        let beyond = score(&[4, 4, 4, 4, 4], factors(0, 1_000_000.0, 0, 60));
        assert_eq!(at_ceiling, beyond);
    }

    #[test]
    fn each_dependent_costs_one_point() {
        assert_eq!(score(&[4, 4, 4, 4, 4], factors(0, 200_000.0, 3, 30)), 97);
    }

    #[test]
    fn dependents_penalty_caps_at_ten_points() {
        assert_eq!(score(&[4, 4, 4, 4, 4], factors(0, 200_000.0, 10, 30)), 90);
        assert_eq!(score(&[4, 4, 4, 4, 4], factors(0, 200_000.0, 25, 30)), 90);
    }

    #[test]
    fn total_never_drops_below_zero() {
        assert_eq!(score(&[1, 1, 1, 1, 1], factors(70, 0.0, 5, 0)), 0);
    }

    #[test]
    fn non_finite_income_contributes_nothing() {
        let zero = score(&[2, 3, 2, 3, 2], factors(40, 0.0, 1, 5));
        assert_eq!(score(&[2, 3, 2, 3, 2], factors(40, f64::NAN, 1, 5)), zero);
        assert_eq!(score(&[2, 3, 2, 3, 2], factors(40, f64::INFINITY, 1, 5)), zero);
    }

    #[test]
    fn invalid_answers_yield_none() {
        let f = factors(30, 100_000.0, 0, 15);
        assert!(calculate_comprehensive_risk_score(&[1, 2, 3], &f).is_none());
        assert!(calculate_comprehensive_risk_score(&[1, 2, 3, 4, 5], &f).is_none());
    }

    #[test]
    fn typed_and_raw_variants_agree() {
        let response = QuestionnaireResponse::try_new(&[4, 2, 3, 1, 4]).unwrap();
        let f = factors(35, 120_000.0, 2, 20);
        assert_eq!(
            Some(RiskScore::comprehensive(&response, &f)),
            calculate_comprehensive_risk_score(&[4, 2, 3, 1, 4], &f)
        );
    }
}
