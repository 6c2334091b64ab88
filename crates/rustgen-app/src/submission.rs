//! Submission tracking: issues ids and decides which completions still count

use chrono::Local;
use rustgen_core::{SubmissionId, SubmissionPhase};

/// Issues monotonically increasing submission ids and keeps the phase of the
/// latest one. Completions for older ids are stale.
#[derive(Debug, Default)]
pub struct SubmissionTracker {
    last_issued: u64,
    phase: SubmissionPhase,
}

impl SubmissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new submission. Any earlier submission becomes stale.
    pub fn begin(&mut self) -> SubmissionId {
        self.last_issued += 1;
        self.phase = SubmissionPhase::Validating;
        SubmissionId(self.last_issued)
    }

    pub fn latest(&self) -> Option<SubmissionId> {
        (self.last_issued > 0).then_some(SubmissionId(self.last_issued))
    }

    pub fn is_latest(&self, id: SubmissionId) -> bool {
        id.0 == self.last_issued
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn validation_failed(&mut self) {
        self.phase = SubmissionPhase::ValidationFailed;
    }

    pub fn requesting(&mut self, submission: SubmissionId) {
        self.phase = SubmissionPhase::Requesting {
            submission,
            started_at: Local::now(),
        };
    }

    /// Record a completion. Returns `false` and leaves the phase alone when
    /// `submission` is stale.
    pub fn finish(&mut self, submission: SubmissionId, success: bool) -> bool {
        if !self.is_latest(submission) {
            return false;
        }
        let finished_at = Local::now();
        self.phase = if success {
            SubmissionPhase::Succeeded {
                submission,
                finished_at,
            }
        } else {
            SubmissionPhase::Failed {
                submission,
                finished_at,
            }
        };
        true
    }
}
