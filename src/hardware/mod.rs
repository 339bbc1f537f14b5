//! Hardware detection public API module.
//!
//! Sizes the parallel probes and produces the host summary logged before a run.

pub mod cpu;

pub use cpu::{detect_cpu_model, detect_logical_cpus, detect_physical_cores};

use crate::models::HardwareInfo;

/// Hardware detector with a cached CPU model.
///
/// Core counts are read on every call; the model string is read once.
#[derive(Debug, Default)]
pub struct HardwareDetector {
    cached_cpu_model: Option<String>,
}

impl HardwareDetector {
    pub fn new() -> Self {
        HardwareDetector {
            cached_cpu_model: None,
        }
    }

    /// Logical CPU count; the multi-core probe starts one worker per CPU.
    pub fn logical_cpus(&self) -> usize {
        detect_logical_cpus()
    }

    /// Detect the host summary.
    pub fn detect_all(&mut self) -> HardwareInfo {
        let cpu_model = match &self.cached_cpu_model {
            Some(cached) => cached.clone(),
            None => {
                let model = detect_cpu_model();
                self.cached_cpu_model = Some(model.clone());
                model
            }
        };

        let info = HardwareInfo {
            cpu_model,
            physical_cores: detect_physical_cores(),
            logical_cpus: detect_logical_cpus(),
        };
        log::debug!("[HW] Detected: {}", info);
        info
    }
}
