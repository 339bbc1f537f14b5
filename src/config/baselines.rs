//! Reference baselines used to normalize elapsed times into scores.
//!
//! A probe that finishes in exactly its baseline time scores 100.

use std::collections::BTreeMap;

use crate::models::ProbeId;

/// Immutable mapping from probe to baseline seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct BaselineTable {
    entries: BTreeMap<ProbeId, f64>,
}

impl BaselineTable {
    /// The reference baselines shipped with hwscore.
    pub fn reference() -> Self {
        BaselineTable::from_entries([
            (ProbeId::SingleCore, 5.0),
            (ProbeId::MultiCore, 2.5),
            (ProbeId::Matrix, 10.0),
            (ProbeId::MemoryBandwidth, 3.0),
            (ProbeId::FloatingPoint, 4.0),
            (ProbeId::Integer, 3.0),
            (ProbeId::ThreadSwitch, 0.2),
            (ProbeId::Sort, 2.0),
            (ProbeId::Compression, 2.0),
            (ProbeId::FileIo, 5.0),
        ])
    }

    /// Build a table from explicit entries. Later duplicates win.
    pub fn from_entries(entries: impl IntoIterator<Item = (ProbeId, f64)>) -> Self {
        BaselineTable {
            entries: entries.into_iter().collect(),
        }
    }

    /// Baseline seconds for `probe`, if present.
    pub fn get(&self, probe: ProbeId) -> Option<f64> {
        self.entries.get(&probe).copied()
    }

    pub fn contains(&self, probe: ProbeId) -> bool {
        self.entries.contains_key(&probe)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in probe order.
    pub fn iter(&self) -> impl Iterator<Item = (ProbeId, f64)> + '_ {
        self.entries.iter().map(|(id, baseline)| (*id, *baseline))
    }
}

impl Default for BaselineTable {
    fn default() -> Self {
        BaselineTable::reference()
    }
}
