//! Parallel worker dispatch for probes that fan out.
//!
//! `ParallelExecutor::run_n_workers` starts `n` workers, releases them together
//! once all have been spawned, and blocks until every one has finished.

use std::sync::{Condvar, Mutex};
use std::thread;

use crate::error::ProbeError;

/// Capability to run `n` independent workers and wait for all of them.
pub trait ParallelExecutor {
    /// Run `workload(index)` on `n` workers; results are in index order.
    fn run_n_workers<T, F>(&self, n: usize, workload: F) -> Result<Vec<T>, ProbeError>
    where
        F: Fn(usize) -> T + Sync,
        T: Send;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GateState {
    Waiting,
    Open,
    Cancelled,
}

/// Start gate: workers park until every sibling exists, or the dispatch is abandoned.
struct StartGate {
    state: Mutex<GateState>,
    signal: Condvar,
}

impl StartGate {
    fn new() -> Self {
        StartGate {
            state: Mutex::new(GateState::Waiting),
            signal: Condvar::new(),
        }
    }

    fn release(&self, next: GateState) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        *state = next;
        self.signal.notify_all();
    }

    /// Returns true when the worker should run its workload.
    fn wait(&self) -> bool {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        while *state == GateState::Waiting {
            state = self.signal.wait(state).unwrap_or_else(|e| e.into_inner());
        }
        *state == GateState::Open
    }
}

/// Executor backed by scoped OS threads.
#[derive(Clone, Debug)]
pub struct ThreadExecutor {
    name_prefix: String,
}

impl Default for ThreadExecutor {
    fn default() -> Self {
        ThreadExecutor::new("hwscore-worker")
    }
}

impl ThreadExecutor {
    pub fn new(name_prefix: impl Into<String>) -> Self {
        ThreadExecutor {
            name_prefix: name_prefix.into(),
        }
    }
}

impl ParallelExecutor for ThreadExecutor {
    fn run_n_workers<T, F>(&self, n: usize, workload: F) -> Result<Vec<T>, ProbeError>
    where
        F: Fn(usize) -> T + Sync,
        T: Send,
    {
        if n == 0 {
            return Ok(Vec::new());
        }

        let gate = StartGate::new();
        let gate = &gate;
        let workload = &workload;

        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(n);

            for index in 0..n {
                let spawned = thread::Builder::new()
                    .name(format!("{}-{}", self.name_prefix, index))
                    .spawn_scoped(scope, move || {
                        if gate.wait() {
                            Some(workload(index))
                        } else {
                            None
                        }
                    });

                match spawned {
                    Ok(handle) => handles.push(handle),
                    Err(e) => {
                        // Already-spawned workers exit without running
                        gate.release(GateState::Cancelled);
                        log::warn!("[EXECUTOR] Failed to spawn worker {}: {}", index, e);
                        return Err(ProbeError::WorkerSpawn {
                            index,
                            reason: e.to_string(),
                        });
                    }
                }
            }

            gate.release(GateState::Open);

            let mut results = Vec::with_capacity(n);
            let mut first_error = None;
            for (index, handle) in handles.into_iter().enumerate() {
                match handle.join() {
                    Ok(Some(value)) => results.push(value),
                    Ok(None) | Err(_) => {
                        first_error.get_or_insert(ProbeError::WorkerPanicked(index));
                    }
                }
            }

            match first_error {
                Some(err) => Err(err),
                None => Ok(results),
            }
        })
    }
}
