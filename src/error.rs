//! Unified error type hierarchy for hwscore
//!
//! Provides structured error handling with ProbeError (a single workload failed)
//! and HarnessError (registration, sequencing and reporting failures).

use std::io;
use thiserror::Error;

use crate::models::ProbeId;

/// Errors raised while a probe executes its workload.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("IO error during probe: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to spawn worker {index}: {reason}")]
    WorkerSpawn { index: usize, reason: String },

    #[error("Worker {0} panicked before completing its workload")]
    WorkerPanicked(usize),

    #[error("Workload verification failed: {0}")]
    Verification(String),

    #[error("Invalid workload parameters: {0}")]
    InvalidWorkload(String),
}

/// Errors raised by the harness around the probes.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("No baseline registered for probe '{0}'")]
    MissingBaseline(ProbeId),

    #[error("Probe '{0}' is already registered")]
    DuplicateProbe(ProbeId),

    #[error("Probe '{probe}' failed: {source}")]
    Probe {
        probe: ProbeId,
        #[source]
        source: ProbeError,
    },

    #[error("Failed to write report line: {0}")]
    Report(#[from] io::Error),

    #[error("Invalid harness transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },
}

impl HarnessError {
    /// The probe this error is attributed to, if any.
    pub fn probe(&self) -> Option<ProbeId> {
        match self {
            HarnessError::MissingBaseline(id)
            | HarnessError::DuplicateProbe(id)
            | HarnessError::Probe { probe: id, .. } => Some(*id),
            HarnessError::Report(_) | HarnessError::InvalidTransition { .. } => None,
        }
    }
}

/// Top-level result type for the binary entry point.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
