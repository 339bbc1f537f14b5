//! Wall-clock timing of probe workloads.
//!
//! Only the closure passed in is timed: input generation and result
//! verification stay outside it.

use std::hint::black_box;
use std::time::Instant;

/// Time one execution of `workload`, returning its output and elapsed seconds.
pub fn measure<R>(workload: impl FnOnce() -> R) -> (R, f64) {
    let start = Instant::now();
    let output = black_box(workload());
    let elapsed = start.elapsed().as_secs_f64();
    (output, elapsed)
}

/// Time `repetitions` back-to-back executions as one region.
///
/// The loop probes use this to smooth out scheduling noise: the reported
/// figure is the total, not the per-iteration mean.
pub fn measure_repeated<R>(repetitions: u32, mut workload: impl FnMut() -> R) -> f64 {
    let start = Instant::now();
    for _ in 0..repetitions {
        black_box(workload());
    }
    start.elapsed().as_secs_f64()
}
