//! Memory bandwidth and floating-point throughput probes.
//!
//! Both stream over a large pre-generated random array and write a fresh
//! output array of the same length.

use super::timer::measure;
use super::{random_f64s, Probe};
use crate::error::ProbeError;
use crate::models::ProbeId;

/// Elements scaled by the memory bandwidth probe.
pub const MEMORY_ARRAY_LEN: usize = 100_000_000;
/// Elements passed through sin+cos by the floating-point probe.
pub const FLOAT_ARRAY_LEN: usize = 10_000_000;

/// Elementwise `x * 2`.
pub fn scale_by_two(input: &[f64]) -> Vec<f64> {
    input.iter().map(|x| x * 2.0).collect()
}

/// Elementwise `sin(x) + cos(x)`.
pub fn sin_plus_cos(input: &[f64]) -> Vec<f64> {
    input.iter().map(|x| x.sin() + x.cos()).collect()
}

#[derive(Clone, Debug)]
pub struct MemoryBandwidthProbe {
    len: usize,
}

impl Default for MemoryBandwidthProbe {
    fn default() -> Self {
        MemoryBandwidthProbe {
            len: MEMORY_ARRAY_LEN,
        }
    }
}

impl MemoryBandwidthProbe {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }
}

impl Probe for MemoryBandwidthProbe {
    fn id(&self) -> ProbeId {
        ProbeId::MemoryBandwidth
    }

    fn run(&self) -> Result<f64, ProbeError> {
        log::debug!("[MEMORY] Generating {} random f64", self.len);
        let input = random_f64s(self.len);
        let (_scaled, elapsed) = measure(|| scale_by_two(&input));
        Ok(elapsed)
    }
}

#[derive(Clone, Debug)]
pub struct FloatingPointProbe {
    len: usize,
}

impl Default for FloatingPointProbe {
    fn default() -> Self {
        FloatingPointProbe {
            len: FLOAT_ARRAY_LEN,
        }
    }
}

impl FloatingPointProbe {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }
}

impl Probe for FloatingPointProbe {
    fn id(&self) -> ProbeId {
        ProbeId::FloatingPoint
    }

    fn run(&self) -> Result<f64, ProbeError> {
        log::debug!("[FLOAT] Generating {} random f64", self.len);
        let input = random_f64s(self.len);
        let (_result, elapsed) = measure(|| sin_plus_cos(&input));
        Ok(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_by_two() {
        assert_eq!(scale_by_two(&[0.0, 0.25, 1.5]), vec![0.0, 0.5, 3.0]);
        assert!(scale_by_two(&[]).is_empty());
    }

    #[test]
    fn test_sin_plus_cos() {
        let out = sin_plus_cos(&[0.0, std::f64::consts::FRAC_PI_2]);
        assert!((out[0] - 1.0).abs() < 1e-12);
        assert!((out[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_memory_probe_runs() {
        let probe = MemoryBandwidthProbe::new().with_len(10_000);
        assert_eq!(probe.id(), ProbeId::MemoryBandwidth);
        assert!(probe.run().unwrap() >= 0.0);
    }

    #[test]
    fn test_floating_point_probe_runs() {
        let probe = FloatingPointProbe::new().with_len(10_000);
        assert_eq!(probe.id(), ProbeId::FloatingPoint);
        assert!(probe.run().unwrap() >= 0.0);
    }
}
