//! Thread-switch probe: spawn a batch of short-lived spinning workers and join them.
//!
//! The workload is deliberately trivial so that the measured time is
//! dominated by thread creation, scheduling and teardown.

use std::hint::black_box;

use super::timer::measure;
use super::Probe;
use crate::error::ProbeError;
use crate::models::ProbeId;
use crate::system::executor::{ParallelExecutor, ThreadExecutor};

pub const THREAD_SWITCH_WORKERS: usize = 10;
pub const SPIN_ITERATIONS: u64 = 100_000;

/// No-op loop of `iterations` steps; returns the step count.
pub fn spin(iterations: u64) -> u64 {
    let mut steps = 0u64;
    for i in 0..iterations {
        black_box(i);
        steps += 1;
    }
    steps
}

#[derive(Clone, Debug)]
pub struct ThreadSwitchProbe<E = ThreadExecutor> {
    executor: E,
    workers: usize,
    iterations: u64,
}

impl Default for ThreadSwitchProbe<ThreadExecutor> {
    fn default() -> Self {
        ThreadSwitchProbe::with_executor(ThreadExecutor::new("thread-switch"))
    }
}

impl ThreadSwitchProbe<ThreadExecutor> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: ParallelExecutor> ThreadSwitchProbe<E> {
    pub fn with_executor(executor: E) -> Self {
        ThreadSwitchProbe {
            executor,
            workers: THREAD_SWITCH_WORKERS,
            iterations: SPIN_ITERATIONS,
        }
    }

    #[must_use]
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }
}

impl<E: ParallelExecutor> Probe for ThreadSwitchProbe<E> {
    fn id(&self) -> ProbeId {
        ProbeId::ThreadSwitch
    }

    fn run(&self) -> Result<f64, ProbeError> {
        let iterations = self.iterations;
        let (outcome, elapsed) =
            measure(|| self.executor.run_n_workers(self.workers, |_| spin(iterations)));
        let steps = outcome?;
        log::debug!(
            "[THREAD_SWITCH] {} workers joined, {} total steps",
            steps.len(),
            steps.iter().sum::<u64>()
        );
        Ok(elapsed)
    }
}
