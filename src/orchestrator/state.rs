//! Harness State Management
//!
//! **Architecture**:
//! - `HarnessState`: where a run currently is
//! - Transitions are validated; the harness drives them strictly sequentially
//!
//! ```text
//! Idle -> Running(p1) -> Collected(p1) -> Running(p2) -> ... -> Done
//!              \-> Aborted(p1)
//! ```

use std::fmt;

use crate::models::ProbeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HarnessState {
    /// Nothing has run yet (or the previous run was reset)
    #[default]
    Idle,
    /// A probe is executing
    Running(ProbeId),
    /// The probe's report has been emitted
    Collected(ProbeId),
    /// Every registered probe has been collected
    Done,
    /// A probe failed under the abort policy
    Aborted(ProbeId),
}

impl HarnessState {
    pub fn as_str(&self) -> &'static str {
        match self {
            HarnessState::Idle => "idle",
            HarnessState::Running(_) => "running",
            HarnessState::Collected(_) => "collected",
            HarnessState::Done => "done",
            HarnessState::Aborted(_) => "aborted",
        }
    }

    /// Check if a transition to `next` is valid.
    pub fn can_transition_to(&self, next: HarnessState) -> bool {
        use HarnessState::*;
        match (*self, next) {
            (Idle, Running(_)) | (Idle, Done) => true,
            (Running(current), Collected(p)) | (Running(current), Aborted(p)) => current == p,
            (Collected(previous), Running(p)) => previous != p,
            (Collected(_), Done) => true,
            (Done, Idle) | (Aborted(_), Idle) => true,
            _ => false,
        }
    }

    /// Move to `next`, rejecting invalid transitions.
    pub fn transition_to(&mut self, next: HarnessState) -> Result<(), String> {
        if !self.can_transition_to(next) {
            return Err(format!("{} -> {}", self, next));
        }
        *self = next;
        Ok(())
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, HarnessState::Done | HarnessState::Aborted(_))
    }
}

impl fmt::Display for HarnessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessState::Running(p) | HarnessState::Collected(p) | HarnessState::Aborted(p) => {
                write!(f, "{}({})", self.as_str(), p)
            }
            _ => f.write_str(self.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut state = HarnessState::default();
        state.transition_to(HarnessState::Running(ProbeId::SingleCore)).unwrap();
        state.transition_to(HarnessState::Collected(ProbeId::SingleCore)).unwrap();
        state.transition_to(HarnessState::Running(ProbeId::MultiCore)).unwrap();
        state.transition_to(HarnessState::Collected(ProbeId::MultiCore)).unwrap();
        state.transition_to(HarnessState::Done).unwrap();
        assert!(state.is_terminal());
    }

    #[test]
    fn test_collect_must_match_running_probe() {
        let state = HarnessState::Running(ProbeId::Sort);
        assert!(!state.can_transition_to(HarnessState::Collected(ProbeId::Matrix)));
        assert!(state.can_transition_to(HarnessState::Aborted(ProbeId::Sort)));
    }

    #[test]
    fn test_no_overlapping_probes() {
        let state = HarnessState::Running(ProbeId::Sort);
        assert!(!state.can_transition_to(HarnessState::Running(ProbeId::FileIo)));
        assert!(!state.can_transition_to(HarnessState::Done));
    }

    #[test]
    fn test_terminal_states_reset_to_idle() {
        assert!(HarnessState::Done.can_transition_to(HarnessState::Idle));
        assert!(HarnessState::Aborted(ProbeId::FileIo).can_transition_to(HarnessState::Idle));
        assert!(!HarnessState::Aborted(ProbeId::FileIo).can_transition_to(HarnessState::Done));
    }

    #[test]
    fn test_invalid_transition_message() {
        let mut state = HarnessState::Idle;
        let err = state.transition_to(HarnessState::Collected(ProbeId::Matrix)).unwrap_err();
        assert_eq!(err, "idle -> collected(matrix)");
        assert_eq!(state, HarnessState::Idle);
    }
}
