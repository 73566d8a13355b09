//! Weighted risk score calculation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::level::RiskLevel;
use super::questionnaire::QuestionnaireResponse;
use super::questions::{MIN_ANSWER, QUESTION_COUNT, RISK_WEIGHTS};

/// Derived risk score.
///
/// Scores computed from a validated [`QuestionnaireResponse`] are always in
/// 0-100. Scores computed by [`calculate_risk_score`] from unvalidated input
/// may lie outside that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskScore(i64);

impl RiskScore {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(100);

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Score for a validated response.
    pub fn from_response(response: &QuestionnaireResponse) -> Self {
        Self(weighted_score(&response.as_i64()))
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// True if the score lies in 0-100.
    pub fn is_in_bounds(&self) -> bool {
        (Self::MIN.0..=Self::MAX.0).contains(&self.0)
    }

    /// The score as a percentage, or `None` when it was extrapolated out of bounds.
    pub fn as_percent(&self) -> Option<u8> {
        if self.is_in_bounds() {
            u8::try_from(self.0).ok()
        } else {
            None
        }
    }

    pub fn level(&self) -> RiskLevel {
        RiskLevel::from_score(self.0)
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scores a raw answer vector.
///
/// Returns `None` unless exactly five answers are given. Answer values are
/// not range-checked: each is normalised as `(answer - 1) / 3` and weighted,
/// so values outside 1-4 extrapolate linearly. Callers wanting strict input
/// validation use [`QuestionnaireResponse::try_new`] first.
pub fn calculate_risk_score(answers: &[i64]) -> Option<RiskScore> {
    let answers: &[i64; QUESTION_COUNT] = answers.try_into().ok()?;
    Some(RiskScore(weighted_score(answers)))
}

/// Rounds `sum((a - 1) * w) / 3` half-up, using integer arithmetic.
///
/// The numerator is an integer, so the fractional part of the quotient is
/// always 0, 1/3 or 2/3 and only a remainder of 2 rounds up.
fn weighted_score(answers: &[i64; QUESTION_COUNT]) -> i64 {
    let numerator: i128 = answers
        .iter()
        .zip(RISK_WEIGHTS.iter())
        .map(|(&answer, &weight)| (i128::from(answer) - i128::from(MIN_ANSWER)) * i128::from(weight))
        .sum();

    let quotient = numerator.div_euclid(3);
    let rounded = if numerator.rem_euclid(3) == 2 {
        quotient + 1
    } else {
        quotient
    };

    rounded.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn score(answers: &[i64]) -> i64 {
        calculate_risk_score(answers).unwrap().value()
    }

    #[test]
    fn conservative_answers_score_zero() {
        assert_eq!(score(&[1, 1, 1, 1, 1]), 0);
    }

    #[test]
    fn aggressive_answers_score_one_hundred() {
        assert_eq!(score(&[4, 4, 4, 4, 4]), 100);
    }

    #[test]
    fn mixed_answers_fall_between_forty_and_eighty() {
        // (50 + 20 + 90 + 30 + 10) / 3 = 66.67
        let s = score(&[3, 2, 4, 3, 2]);
        assert_eq!(s, 67);
        assert!(s > 40 && s < 80);
    }

    #[test]
    fn heaviest_question_moves_score_by_thirty() {
        let high = score(&[1, 1, 4, 1, 1]);
        let low = score(&[1, 1, 1, 1, 1]);
        assert_eq!(high, 30);
        assert!(high - low > 25);
    }

    #[test]
    fn thirds_round_to_nearest() {
        // 100 / 3 = 33.33
        assert_eq!(score(&[2, 2, 2, 2, 2]), 33);
        // 200 / 3 = 66.67
        assert_eq!(score(&[3, 3, 3, 3, 3]), 67);
    }

    #[test]
    fn wrong_length_returns_none() {
        assert_eq!(calculate_risk_score(&[1, 2, 3]), None);
        assert_eq!(calculate_risk_score(&[1, 2, 3, 4, 1, 2]), None);
        assert_eq!(calculate_risk_score(&[]), None);
    }

    #[test]
    fn out_of_range_answers_extrapolate() {
        // (6 * 25) / 3 = 50 above the all-ones baseline
        let s = calculate_risk_score(&[7, 1, 1, 1, 1]).unwrap();
        assert_eq!(s.value(), 50);

        let above = calculate_risk_score(&[7, 7, 7, 7, 7]).unwrap();
        assert_eq!(above.value(), 200);
        assert!(!above.is_in_bounds());
        assert_eq!(above.as_percent(), None);

        let below = calculate_risk_score(&[0, 0, 0, 0, 0]).unwrap();
        assert_eq!(below.value(), -33);
        assert!(!below.is_in_bounds());
    }

    #[test]
    fn extreme_answers_do_not_overflow() {
        let s = calculate_risk_score(&[i64::MAX; 5]).unwrap();
        assert!(s.value() > 0);
        let s = calculate_risk_score(&[i64::MIN; 5]).unwrap();
        assert!(s.value() < 0);
    }

    #[test]
    fn from_response_matches_free_function() {
        let response = QuestionnaireResponse::try_new(&[4, 3, 4, 3, 4]).unwrap();
        assert_eq!(
            Some(RiskScore::from_response(&response)),
            calculate_risk_score(&[4, 3, 4, 3, 4])
        );
    }

    #[test]
    fn score_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&RiskScore::new(67)).unwrap(), "67");
    }

    fn valid_answers() -> impl Strategy<Value = Vec<i64>> {
        prop::collection::vec(1i64..=4, QUESTION_COUNT)
    }

    proptest! {
        #[test]
        fn valid_answers_stay_in_bounds(answers in valid_answers()) {
            let s = calculate_risk_score(&answers).unwrap();
            prop_assert!(s.is_in_bounds());
        }

        #[test]
        fn scoring_is_deterministic(answers in valid_answers()) {
            prop_assert_eq!(calculate_risk_score(&answers), calculate_risk_score(&answers));
        }

        #[test]
        fn raising_one_answer_never_lowers_score(
            answers in valid_answers(),
            position in 0usize..QUESTION_COUNT,
        ) {
            prop_assume!(answers[position] < 4);
            let mut raised = answers.clone();
            raised[position] += 1;
            prop_assert!(score(&raised) >= score(&answers));
        }

        #[test]
        fn any_length_other_than_five_is_rejected(
            answers in prop::collection::vec(1i64..=4, 0..12usize),
        ) {
            prop_assume!(answers.len() != QUESTION_COUNT);
            prop_assert_eq!(calculate_risk_score(&answers), None);
        }
    }
}
