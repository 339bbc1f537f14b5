//! Baseline-relative scoring.
//!
//! `score = baseline / elapsed * 100`: matching the baseline scores 100,
//! twice as fast scores 200, with no upper bound.

/// Raw score. Infinite or NaN when `elapsed_seconds` is zero.
pub fn score(elapsed_seconds: f64, baseline_seconds: f64) -> f64 {
    baseline_seconds / elapsed_seconds * 100.0
}

/// Score with `elapsed_seconds` clamped to at least `floor`.
pub fn score_with_floor(elapsed_seconds: f64, baseline_seconds: f64, floor: f64) -> f64 {
    score(elapsed_seconds.max(floor), baseline_seconds)
}

/// Scorer applying the harness's degenerate-timing policy.
#[derive(Clone, Debug, PartialEq)]
pub struct PerformanceScorer {
    elapsed_floor: Option<f64>,
}

impl PerformanceScorer {
    pub fn new(elapsed_floor: Option<f64>) -> Self {
        PerformanceScorer { elapsed_floor }
    }

    pub fn elapsed_floor(&self) -> Option<f64> {
        self.elapsed_floor
    }

    /// Score one measurement, clamping to the floor when configured.
    pub fn score(&self, elapsed_seconds: f64, baseline_seconds: f64) -> f64 {
        match self.elapsed_floor {
            Some(floor) if elapsed_seconds < floor => {
                log::warn!(
                    "[SCORING] Elapsed {:.9}s below floor {:.9}s, scoring at the floor",
                    elapsed_seconds,
                    floor
                );
                score_with_floor(elapsed_seconds, baseline_seconds, floor)
            }
            _ => score(elapsed_seconds, baseline_seconds),
        }
    }
}
