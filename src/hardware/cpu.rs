//! CPU detection and identification module.

use std::fs;

/// Extract the first "model name" entry from /proc/cpuinfo content.
fn parse_cpu_model(content: &str) -> Option<String> {
    content
        .lines()
        .filter(|line| line.starts_with("model name"))
        .find_map(|line| line.split_once(':').map(|(_, value)| value.trim().to_string()))
        .filter(|model| !model.is_empty())
}

/// Detect CPU model name from /proc/cpuinfo, "Unknown" when unavailable.
pub fn detect_cpu_model() -> String {
    fs::read_to_string("/proc/cpuinfo")
        .ok()
        .and_then(|content| parse_cpu_model(&content))
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Number of logical CPUs available to this process.
pub fn detect_logical_cpus() -> usize {
    num_cpus::get().max(1)
}

/// Number of physical cores.
pub fn detect_physical_cores() -> usize {
    num_cpus::get_physical().max(1)
}
