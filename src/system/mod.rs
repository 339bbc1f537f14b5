//! System module: logging setup, parallel dispatch and the benchmark probes.

pub mod executor;
pub mod performance;

pub use executor::{ParallelExecutor, ThreadExecutor};

use log::LevelFilter;

use crate::log_collector::LogCollector;

/// Install a `LogCollector` as the global `log` backend.
///
/// Returns a handle so callers can flush before exiting.
pub fn initialize_logging(max_level: LevelFilter) -> Result<LogCollector, log::SetLoggerError> {
    let collector = LogCollector::new(max_level);
    log::set_boxed_logger(Box::new(collector.clone()))?;
    log::set_max_level(max_level);
    Ok(collector)
}

/// Flush every pending log line.
pub fn flush_all_logs(collector: &LogCollector) {
    if let Err(e) = collector.wait_for_empty() {
        eprintln!("[System] Failed to flush logs: {}", e);
    }
}
