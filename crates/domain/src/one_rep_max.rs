//! Brzycki one-rep-max estimation and its inverse.
//!
//! Every function is total: non-positive or non-finite input yields `0` instead of an error, which
//! is the natural state of a half-filled form.

use crate::rounding::{MAX_REPS, clamp_reps, finite_or_zero, is_positive, round_to_half};

/// Estimates the maximal single-repetition load from a submaximal set.
///
/// A single rep is its own maximum and is returned unrounded. Rep counts above 36 are clamped to
/// 36, as the formula diverges at 37.
#[must_use]
pub fn estimate_one_rep_max(weight: f64, reps: u32) -> f64 {
    if !is_positive(weight) || reps == 0 {
        return 0.0;
    }

    if reps == 1 {
        return weight;
    }

    let reps = f64::from(clamp_reps(reps));
    finite_or_zero(round_to_half(weight * (36.0 / (37.0 - reps))))
}

/// Weight corresponding to a percentage of the one-rep max, rounded to the nearest half unit.
#[must_use]
pub fn weight_for_percentage(one_rep_max: f64, percentage: f64) -> f64 {
    if !is_positive(one_rep_max) || !is_positive(percentage) {
        return 0.0;
    }

    finite_or_zero(round_to_half(one_rep_max * (percentage / 100.0)))
}

/// Predicts the number of repetitions achievable with the given weight.
///
/// The result saturates at 1 for weights at or above the one-rep max and at 36 for very light
/// weights, so the boundaries are not exact predictions.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn reps_for_weight(one_rep_max: f64, weight: f64) -> u32 {
    if !is_positive(one_rep_max) || !is_positive(weight) {
        return 0;
    }

    (37.0 - 36.0 * weight / one_rep_max)
        .round()
        .clamp(1.0, f64::from(MAX_REPS)) as u32
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(100.0, 5, 112.5)]
    #[case(80.0, 10, 106.5)]
    #[case(200.0, 3, 212.0)]
    #[case(60.0, 12, 86.5)]
    fn test_estimate_one_rep_max(#[case] weight: f64, #[case] reps: u32, #[case] expected: f64) {
        assert_approx_eq!(estimate_one_rep_max(weight, reps), expected);
    }

    #[rstest]
    #[case(225.0)]
    #[case(100.3)]
    #[case(0.5)]
    fn test_estimate_one_rep_max_single_rep(#[case] weight: f64) {
        assert_eq!(estimate_one_rep_max(weight, 1), weight);
    }

    #[rstest]
    #[case(0.0, 5)]
    #[case(100.0, 0)]
    #[case(0.0, 0)]
    #[case(-100.0, 5)]
    #[case(f64::NAN, 5)]
    #[case(f64::INFINITY, 5)]
    #[case::overflow(1e308, 2)]
    #[case::overflow_at_max_reps(f64::MAX, 36)]
    fn test_estimate_one_rep_max_invalid(#[case] weight: f64, #[case] reps: u32) {
        assert_eq!(estimate_one_rep_max(weight, reps), 0.0);
    }

    #[rstest]
    #[case(37)]
    #[case(38)]
    #[case(100)]
    #[case(u32::MAX)]
    fn test_estimate_one_rep_max_beyond_formula_domain(#[case] reps: u32) {
        let estimate = estimate_one_rep_max(100.0, reps);
        assert!(estimate.is_finite());
        assert!(estimate > 0.0);
        assert_eq!(estimate, estimate_one_rep_max(100.0, 36));
        assert_eq!(estimate, 3600.0);
    }

    #[test]
    fn test_estimate_one_rep_max_is_monotonic_in_reps() {
        let estimates = (1..=36)
            .map(|reps| estimate_one_rep_max(100.0, reps))
            .collect::<Vec<_>>();
        assert!(estimates.windows(2).all(|w| w[0] <= w[1]));
    }

    #[rstest]
    #[case(200.0, 80.0, 160.0)]
    #[case(200.0, 85.0, 170.0)]
    #[case(150.0, 90.0, 135.0)]
    #[case(225.0, 67.0, 151.0)]
    #[case(112.5, 100.0, 112.5)]
    #[case(100.3, 100.0, 100.5)]
    #[case(0.0, 80.0, 0.0)]
    #[case(200.0, 0.0, 0.0)]
    #[case(0.0, 0.0, 0.0)]
    #[case(-200.0, 80.0, 0.0)]
    #[case(200.0, -80.0, 0.0)]
    #[case(f64::NAN, 80.0, 0.0)]
    #[case::overflow(f64::MAX, 100.0, 0.0)]
    #[case::overflow_of_percentage(200.0, f64::MAX, 0.0)]
    fn test_weight_for_percentage(
        #[case] one_rep_max: f64,
        #[case] percentage: f64,
        #[case] expected: f64,
    ) {
        assert_eq!(weight_for_percentage(one_rep_max, percentage), expected);
    }

    #[rstest]
    #[case(200.0, 180.0, 5)]
    #[case(200.0, 160.0, 8)]
    #[case(100.0, 90.0, 5)]
    #[case(200.0, 100.0, 19)]
    #[case(200.0, 200.0, 1)]
    #[case(200.0, 210.0, 1)]
    #[case(200.0, 1000.0, 1)]
    #[case(200.0, 1.0, 36)]
    #[case(200.0, 0.001, 36)]
    #[case(0.0, 100.0, 0)]
    #[case(200.0, 0.0, 0)]
    #[case(0.0, 0.0, 0)]
    #[case(200.0, f64::NAN, 0)]
    fn test_reps_for_weight(#[case] one_rep_max: f64, #[case] weight: f64, #[case] expected: u32) {
        assert_eq!(reps_for_weight(one_rep_max, weight), expected);
    }

    #[rstest]
    #[case(100.0, 5)]
    #[case(80.0, 10)]
    #[case(142.5, 3)]
    fn test_reps_for_weight_inverts_estimate(#[case] weight: f64, #[case] reps: u32) {
        assert_eq!(
            reps_for_weight(estimate_one_rep_max(weight, reps), weight),
            reps
        );
    }

    #[rstest]
    #[case(100.0, 5)]
    #[case(0.0, 5)]
    #[case(77.5, 40)]
    fn test_calculations_are_deterministic(#[case] weight: f64, #[case] reps: u32) {
        assert_eq!(
            estimate_one_rep_max(weight, reps),
            estimate_one_rep_max(weight, reps)
        );
        assert_eq!(
            weight_for_percentage(weight, 85.0),
            weight_for_percentage(weight, 85.0)
        );
        assert_eq!(
            reps_for_weight(weight * 1.2, weight),
            reps_for_weight(weight * 1.2, weight)
        );
    }
}
