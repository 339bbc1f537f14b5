//! Benchmark probes and the shared measurement contract.
//!
//! ## Architecture
//! - **Probe**: one self-contained workload that generates its own input and
//!   reports the wall-clock seconds of its timed region
//! - **Timer** (`timer`): start/stop around exactly the timed region
//! - **Scorer** (`scoring`): `baseline / elapsed * 100`
//!
//! | Probe | Module | Timed region |
//! |---|---|---|
//! | single-core, multi-core, integer | `cpu` | all repetitions / dispatch + join |
//! | matrix | `matrix` | multiply |
//! | memory-bandwidth, floating-point | `memory` | elementwise pass |
//! | thread-switch | `thread_switch` | spawn + run + join |
//! | sort | `sort` | sort |
//! | compress | `compress` | compress + decompress |
//! | file-io | `file_io` | write + read |

pub mod compress;
pub mod cpu;
pub mod file_io;
pub mod matrix;
pub mod memory;
pub mod scoring;
pub mod sort;
pub mod thread_switch;
pub mod timer;

use rand::Rng;

use crate::error::ProbeError;
use crate::models::ProbeId;

pub use compress::CompressionProbe;
pub use cpu::{IntegerProbe, MultiCoreProbe, SingleCoreProbe};
pub use file_io::FileIoProbe;
pub use matrix::{Matrix, MatrixProbe};
pub use memory::{FloatingPointProbe, MemoryBandwidthProbe};
pub use scoring::{score, score_with_floor, PerformanceScorer};
pub use sort::SortProbe;
pub use thread_switch::ThreadSwitchProbe;
pub use timer::{measure, measure_repeated};

/// One timed micro-benchmark.
///
/// `run` generates fresh input on every call and returns the elapsed
/// seconds of the timed region only.
pub trait Probe {
    fn id(&self) -> ProbeId;

    fn run(&self) -> Result<f64, ProbeError>;
}

/// `len` uniform random values in [0, 1).
pub fn random_f64s(len: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen::<f64>()).collect()
}

/// The ten standard probes in registration order.
///
/// `logical_cpus` sizes the multi-core probe.
pub fn standard_probes(logical_cpus: usize) -> Vec<Box<dyn Probe>> {
    vec![
        Box::new(SingleCoreProbe::new()),
        Box::new(MultiCoreProbe::new(logical_cpus)),
        Box::new(MatrixProbe::new()),
        Box::new(MemoryBandwidthProbe::new()),
        Box::new(FloatingPointProbe::new()),
        Box::new(IntegerProbe::new()),
        Box::new(ThreadSwitchProbe::new()),
        Box::new(SortProbe::new()),
        Box::new(CompressionProbe::new()),
        Box::new(FileIoProbe::new()),
    ]
}
