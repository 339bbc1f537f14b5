//! Core data types for hwscore.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity of one benchmark probe.
///
/// Variant order is the fixed registration order of the standard battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProbeId {
    SingleCore,
    MultiCore,
    Matrix,
    MemoryBandwidth,
    FloatingPoint,
    Integer,
    ThreadSwitch,
    Sort,
    #[serde(rename = "compress")]
    Compression,
    FileIo,
}

impl ProbeId {
    /// All probes in registration order.
    pub const ALL: [ProbeId; 10] = [
        ProbeId::SingleCore,
        ProbeId::MultiCore,
        ProbeId::Matrix,
        ProbeId::MemoryBandwidth,
        ProbeId::FloatingPoint,
        ProbeId::Integer,
        ProbeId::ThreadSwitch,
        ProbeId::Sort,
        ProbeId::Compression,
        ProbeId::FileIo,
    ];

    /// Stable machine key for this probe.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeId::SingleCore => "single-core",
            ProbeId::MultiCore => "multi-core",
            ProbeId::Matrix => "matrix",
            ProbeId::MemoryBandwidth => "memory-bandwidth",
            ProbeId::FloatingPoint => "floating-point",
            ProbeId::Integer => "integer",
            ProbeId::ThreadSwitch => "thread-switch",
            ProbeId::Sort => "sort",
            ProbeId::Compression => "compress",
            ProbeId::FileIo => "file-io",
        }
    }

    /// Human-readable name used on report lines.
    pub fn display_name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => match self {
                ProbeId::SingleCore => "Single-core performance",
                ProbeId::MultiCore => "Multi-core performance",
                ProbeId::Matrix => "Matrix computation performance",
                ProbeId::MemoryBandwidth => "Memory bandwidth performance",
                ProbeId::FloatingPoint => "Floating-point performance",
                ProbeId::Integer => "Integer computation performance",
                ProbeId::ThreadSwitch => "Thread switching performance",
                ProbeId::Sort => "Sorting performance",
                ProbeId::Compression => "Compression/decompression performance",
                ProbeId::FileIo => "File I/O performance",
            },
            Locale::Chinese => match self {
                ProbeId::SingleCore => "单核性能",
                ProbeId::MultiCore => "多核性能",
                ProbeId::Matrix => "矩阵计算性能",
                ProbeId::MemoryBandwidth => "内存带宽性能",
                ProbeId::FloatingPoint => "浮点运算性能",
                ProbeId::Integer => "整数计算性能",
                ProbeId::ThreadSwitch => "线程切换性能",
                ProbeId::Sort => "排序算法性能",
                ProbeId::Compression => "压缩/解压缩性能",
                ProbeId::FileIo => "文件 I/O 性能",
            },
        }
    }
}

impl fmt::Display for ProbeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProbeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProbeId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s.trim())
            .ok_or_else(|| format!("Unknown probe: {}", s))
    }
}

/// Language used for report lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    English,
    Chinese,
}

impl Locale {
    /// Unit suffix for seconds.
    pub fn seconds_unit(&self) -> &'static str {
        match self {
            Locale::English => "s",
            Locale::Chinese => "秒",
        }
    }
}

/// Outcome of one successful probe invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeResult {
    pub probe: ProbeId,
    /// Display name at the time the result was rendered
    pub name: String,
    /// Wall-clock seconds spent in the timed region
    pub elapsed_seconds: f64,
    /// `baseline / elapsed * 100`
    pub score: f64,
}

impl ProbeResult {
    pub fn new(probe: ProbeId, name: impl Into<String>, elapsed_seconds: f64, score: f64) -> Self {
        ProbeResult {
            probe,
            name: name.into(),
            elapsed_seconds,
            score,
        }
    }
}

/// One entry of the harness report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum ProbeReport {
    Completed(ProbeResult),
    /// Only produced when the harness continues past probe failures
    Failed {
        probe: ProbeId,
        name: String,
        error: String,
    },
}

impl ProbeReport {
    pub fn probe(&self) -> ProbeId {
        match self {
            ProbeReport::Completed(result) => result.probe,
            ProbeReport::Failed { probe, .. } => *probe,
        }
    }

    pub fn result(&self) -> Option<&ProbeResult> {
        match self {
            ProbeReport::Completed(result) => Some(result),
            ProbeReport::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ProbeReport::Failed { .. })
    }
}

/// Host summary logged before a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareInfo {
    pub cpu_model: String,
    pub physical_cores: usize,
    pub logical_cpus: usize,
}

impl fmt::Display for HardwareInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} cores / {} threads)",
            self.cpu_model, self.physical_cores, self.logical_cpus
        )
    }
}
