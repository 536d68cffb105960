//! Descriptive statistics for study sessions.
//!
//! Every function here is pure and total: degenerate input (negative
//! minutes, empty slices, out-of-range ratings) is normalized to a neutral
//! value instead of producing an error, so interactive callers never abort
//! on a single bad session.

/// Lowest focus rating after clamping.
pub const FOCUS_MIN: f64 = 0.0;
/// Highest focus rating after clamping.
pub const FOCUS_MAX: f64 = 10.0;
/// Score deducted for each break beyond the first.
pub const BREAK_PENALTY: f64 = 0.3;

/// Effective study minutes after subtracting breaks.
///
/// Both inputs are clamped to zero first; the result is never negative.
pub fn effective_study_time(total_minutes: f64, break_minutes: f64) -> f64 {
    let total = total_minutes.max(0.0);
    let brk = break_minutes.max(0.0);
    (total - brk).max(0.0)
}

/// Reading speed in pages per hour. `0.0` when `minutes` is not positive.
pub fn pages_per_hour(pages: f64, minutes: f64) -> f64 {
    if minutes <= 0.0 {
        return 0.0;
    }
    pages / (minutes / 60.0)
}

/// Adjusted focus score on a 0-10 scale.
///
/// The rating is clamped into `[FOCUS_MIN, FOCUS_MAX]`, then
/// [`BREAK_PENALTY`] is subtracted per break beyond the first, then the
/// result is floored at zero.
pub fn focus_score(focus_rating: f64, breaks: i64) -> f64 {
    let base = focus_rating.clamp(FOCUS_MIN, FOCUS_MAX);
    let extra_breaks = breaks.saturating_sub(1).max(0);
    let penalty = BREAK_PENALTY * extra_breaks as f64;
    (base - penalty).max(0.0)
}

/// Arithmetic mean, `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median, `0.0` for an empty slice.
///
/// Even-length input averages the two central values of the sorted copy.
pub fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    let mid = n / 2;
    if n % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_effective_study_time_subtracts_breaks() {
        assert_eq!(effective_study_time(90.0, 15.0), 75.0);
    }

    #[test]
    fn test_effective_study_time_never_negative() {
        assert_eq!(effective_study_time(10.0, 30.0), 0.0);
        assert_eq!(effective_study_time(-20.0, 5.0), 0.0);
        // Negative breaks count as zero, not as bonus time
        assert_eq!(effective_study_time(45.0, -10.0), 45.0);
    }

    #[test]
    fn test_pages_per_hour() {
        assert_eq!(pages_per_hour(10.0, 0.0), 0.0);
        assert_eq!(pages_per_hour(10.0, -5.0), 0.0);
        assert_eq!(pages_per_hour(30.0, 90.0), 20.0);
        assert_eq!(pages_per_hour(45.0, 180.0), 15.0);
    }

    #[test]
    fn test_focus_score_penalizes_extra_breaks() {
        assert_eq!(focus_score(10.0, 1), 10.0);
        assert_eq!(focus_score(10.0, 0), 10.0);
        assert!(approx(focus_score(10.0, 4), 9.1));
    }

    #[test]
    fn test_focus_score_clamps_rating_first() {
        // 15 clamps to 10, then two extra breaks cost 0.6
        assert!(approx(focus_score(15.0, 3), 9.4));
        assert_eq!(focus_score(-3.0, 0), 0.0);
        assert_eq!(focus_score(1.0, 100), 0.0);
    }

    #[test]
    fn test_focus_score_negative_breaks() {
        assert_eq!(focus_score(7.0, -5), 7.0);
        assert_eq!(focus_score(7.0, i64::MIN), 7.0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[4.0, 6.0]), 5.0);
        assert_eq!(mean(&[8.0, 9.0, 7.0]), 8.0);
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&[]), 0.0);
        assert_eq!(median(&[3.0]), 3.0);
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(median(&[4.0, 1.0, 3.0]), 3.0);
    }

    #[test]
    fn test_median_leaves_input_untouched() {
        let values = vec![9.0, 1.0, 5.0];
        let _ = median(&values);
        assert_eq!(values, vec![9.0, 1.0, 5.0]);
    }

    proptest! {
        #[test]
        fn effective_time_matches_clamped_difference(total in 0.0f64..10_000.0, brk in 0.0f64..10_000.0) {
            let got = effective_study_time(total, brk);
            prop_assert_eq!(got, (total - brk).max(0.0));
            prop_assert!(got >= 0.0);
        }

        #[test]
        fn effective_time_is_non_negative(total in -10_000.0f64..10_000.0, brk in -10_000.0f64..10_000.0) {
            prop_assert!(effective_study_time(total, brk) >= 0.0);
        }

        #[test]
        fn pages_per_hour_uses_hours(pages in 0.0f64..1_000.0, minutes in 1.0f64..1_000.0) {
            prop_assert_eq!(pages_per_hour(pages, minutes), pages / (minutes / 60.0));
        }

        #[test]
        fn focus_score_stays_in_range(rating in -100.0f64..100.0, breaks in any::<i64>()) {
            let score = focus_score(rating, breaks);
            prop_assert!(score >= 0.0);
            prop_assert!(score <= FOCUS_MAX);
        }

        #[test]
        fn median_lies_between_extremes(values in prop::collection::vec(-1_000.0f64..1_000.0, 1..50)) {
            let m = median(&values);
            let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(m >= lo && m <= hi);
        }
    }
}
