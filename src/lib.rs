//! hwscore: composite hardware benchmark harness
//!
//! Runs a fixed battery of ten micro-benchmarks (CPU, memory, floating point,
//! threads, sorting, compression, file I/O) and reports, for each, the elapsed
//! wall-clock time and a score normalized against a fixed baseline
//! (`baseline / elapsed * 100`; 100 means reference speed).
//!
//! The system is organized into functional modules:
//! - **error**: Unified error type hierarchy
//! - **models**: Probe identities, results and reports
//! - **config**: Harness options and the baseline table
//! - **hardware**: CPU detection used to size parallel probes
//! - **system**: Logging setup, parallel executor and the probes themselves
//! - **orchestrator**: Probe registry, sequential runner and report output

pub mod error;
pub mod models;

pub mod config;

pub mod hardware;

pub mod system;

// Decoupled logging backend for the `log` facade
pub mod log_collector;

pub mod orchestrator;

// Re-export the log crate for macro usage
pub use log;

pub use system::{flush_all_logs, initialize_logging};

pub use log_collector::{LogCollector, LogLine};

// ============================================================================
// PUBLIC RE-EXPORTS FOR CONVENIENCE
// ============================================================================

pub use error::{HarnessError, ProbeError, Result};

pub use models::{HardwareInfo, Locale, ProbeId, ProbeReport, ProbeResult};

pub use config::{BaselineTable, FailurePolicy, HarnessConfig, MIN_ELAPSED_SECONDS};

pub use hardware::HardwareDetector;

pub use system::performance::{score, score_with_floor, PerformanceScorer, Probe};
pub use system::{ParallelExecutor, ThreadExecutor};

pub use orchestrator::{Harness, HarnessState, LineReporter, ProbeDescriptor, ResultSink};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert_eq!(VERSION, "0.1.0");
    }

    #[test]
    fn test_models_reexport() {
        assert_eq!(ProbeId::ALL.len(), 10);
        assert_eq!(Locale::default(), Locale::English);
    }
}
