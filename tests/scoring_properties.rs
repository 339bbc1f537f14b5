//! Property tests for baseline-relative scoring.
use hwscore::{score, score_with_floor, PerformanceScorer};
use proptest::prelude::*;

proptest! {
    #[test]
    fn score_is_positive_for_positive_elapsed(
        elapsed in 1e-6f64..1e4,
        baseline in 1e-3f64..100.0,
    ) {
        prop_assert!(score(elapsed, baseline) > 0.0);
    }

    #[test]
    fn score_decreases_as_elapsed_grows(
        elapsed in 1e-4f64..1e3,
        extra in 1e-3f64..1e3,
        baseline in 1e-3f64..100.0,
    ) {
        prop_assert!(score(elapsed + extra, baseline) < score(elapsed, baseline));
    }

    #[test]
    fn score_is_100_at_baseline(baseline in 1e-3f64..1e3) {
        prop_assert_eq!(score(baseline, baseline), 100.0);
    }

    #[test]
    fn floor_never_changes_slow_timings(
        elapsed in 1e-3f64..1e3,
        baseline in 1e-3f64..100.0,
    ) {
        prop_assert_eq!(score_with_floor(elapsed, baseline, 1e-6), score(elapsed, baseline));
        prop_assert_eq!(
            PerformanceScorer::new(Some(1e-6)).score(elapsed, baseline),
            score(elapsed, baseline)
        );
    }

    #[test]
    fn floored_score_is_finite(elapsed in 0.0f64..1e-7, baseline in 1e-3f64..100.0) {
        let s = PerformanceScorer::new(Some(1e-6)).score(elapsed, baseline);
        prop_assert!(s.is_finite());
        prop_assert!(s > 0.0);
    }
}

#[test]
fn zero_elapsed_without_floor_is_not_finite() {
    assert!(!score(0.0, 5.0).is_finite());
}
