//! CPU loop probes: single-core accumulate, multi-core accumulate, integer product.
//!
//! These embed their repetitions inside the timed region, so the elapsed
//! figure is the total over all repetitions.

use std::hint::black_box;

use super::timer::{measure, measure_repeated};
use super::Probe;
use crate::error::ProbeError;
use crate::models::ProbeId;
use crate::system::executor::{ParallelExecutor, ThreadExecutor};

/// Integers summed per accumulate pass.
pub const ACCUMULATE_COUNT: u64 = 10_000_000;
/// Repetitions for the single-core and integer probes.
pub const LOOP_REPETITIONS: u32 = 5;
/// Upper bound (exclusive) of the running product.
pub const PRODUCT_LIMIT: u64 = 10_000_000;
/// The running product resets to 1 once it exceeds this.
pub const PRODUCT_RESET_THRESHOLD: u64 = 1_000_000_000_000;

/// Sum of `0..count`; each term goes through `black_box` so the loop is not folded.
pub fn accumulate(count: u64) -> u64 {
    let mut total = 0u64;
    for i in 0..count {
        total = total.wrapping_add(black_box(i));
    }
    total
}

/// Running product of `1..limit`, reset to 1 whenever it passes the threshold.
pub fn running_product(limit: u64) -> u64 {
    let mut total = 1u64;
    for i in 1..limit {
        total = total.saturating_mul(black_box(i));
        if total > PRODUCT_RESET_THRESHOLD {
            total = 1;
        }
    }
    total
}

/// Accumulate loop on the calling thread, repeated.
#[derive(Clone, Debug)]
pub struct SingleCoreProbe {
    count: u64,
    repetitions: u32,
}

impl Default for SingleCoreProbe {
    fn default() -> Self {
        SingleCoreProbe {
            count: ACCUMULATE_COUNT,
            repetitions: LOOP_REPETITIONS,
        }
    }
}

impl SingleCoreProbe {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_count(mut self, count: u64) -> Self {
        self.count = count;
        self
    }

    #[must_use]
    pub fn with_repetitions(mut self, repetitions: u32) -> Self {
        self.repetitions = repetitions;
        self
    }
}

impl Probe for SingleCoreProbe {
    fn id(&self) -> ProbeId {
        ProbeId::SingleCore
    }

    fn run(&self) -> Result<f64, ProbeError> {
        log::debug!(
            "[SINGLE_CORE] Summing {} integers x{}",
            self.count,
            self.repetitions
        );
        let count = self.count;
        Ok(measure_repeated(self.repetitions, || accumulate(count)))
    }
}

/// One accumulate pass per worker, all workers in parallel.
#[derive(Clone, Debug)]
pub struct MultiCoreProbe<E = ThreadExecutor> {
    executor: E,
    workers: usize,
    count: u64,
}

impl MultiCoreProbe<ThreadExecutor> {
    /// Probe with one worker per logical CPU.
    pub fn new(workers: usize) -> Self {
        MultiCoreProbe::with_executor(ThreadExecutor::new("multi-core"), workers)
    }
}

impl<E: ParallelExecutor> MultiCoreProbe<E> {
    pub fn with_executor(executor: E, workers: usize) -> Self {
        MultiCoreProbe {
            executor,
            workers: workers.max(1),
            count: ACCUMULATE_COUNT,
        }
    }

    #[must_use]
    pub fn with_count(mut self, count: u64) -> Self {
        self.count = count;
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl<E: ParallelExecutor> Probe for MultiCoreProbe<E> {
    fn id(&self) -> ProbeId {
        ProbeId::MultiCore
    }

    fn run(&self) -> Result<f64, ProbeError> {
        log::debug!(
            "[MULTI_CORE] Dispatching {} workers, {} integers each",
            self.workers,
            self.count
        );
        let count = self.count;
        let (outcome, elapsed) =
            measure(|| self.executor.run_n_workers(self.workers, |_| accumulate(count)));
        let totals = outcome?;
        log::debug!("[MULTI_CORE] {} workers joined", totals.len());
        Ok(elapsed)
    }
}

/// Running product with overflow reset, repeated.
#[derive(Clone, Debug)]
pub struct IntegerProbe {
    limit: u64,
    repetitions: u32,
}

impl Default for IntegerProbe {
    fn default() -> Self {
        IntegerProbe {
            limit: PRODUCT_LIMIT,
            repetitions: LOOP_REPETITIONS,
        }
    }
}

impl IntegerProbe {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn with_repetitions(mut self, repetitions: u32) -> Self {
        self.repetitions = repetitions;
        self
    }
}

impl Probe for IntegerProbe {
    fn id(&self) -> ProbeId {
        ProbeId::Integer
    }

    fn run(&self) -> Result<f64, ProbeError> {
        log::debug!(
            "[INTEGER] Running product to {} x{}",
            self.limit,
            self.repetitions
        );
        let limit = self.limit;
        Ok(measure_repeated(self.repetitions, || running_product(limit)))
    }
}
