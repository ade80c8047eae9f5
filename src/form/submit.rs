use std::time::{Duration, Instant};

use tracing::debug;

use crate::domain::SubmissionRecord;

use super::state::FormState;

/// Outcome of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation failed; the per-field errors are already surfaced.
    Rejected { issues: usize },
    /// The record was captured and the simulated send started.
    Accepted,
    /// A send is already in flight; the attempt is ignored.
    AlreadySending,
}

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    Sending {
        record: SubmissionRecord,
        deadline: Instant,
    },
}

/// The submit state machine: validate, capture, simulated send, completion.
///
/// Independent of any event loop. The caller drives it with `submit` on the
/// submit action and `poll` from its tick; time only enters through the
/// `now` arguments. The simulated send has no failure branch; a real
/// transport would add one and route it to the error notification channel.
#[derive(Debug, Clone)]
pub struct SubmitWorkflow {
    phase: Phase,
    send_delay: Duration,
}

impl SubmitWorkflow {
    pub fn new(send_delay: Duration) -> Self {
        Self {
            phase: Phase::Idle,
            send_delay,
        }
    }

    /// Validate every field and, if all pass, capture the record and enter
    /// Sending. A submit while Sending is ignored, not queued.
    pub fn submit(&mut self, form: &mut FormState, now: Instant) -> SubmitAttempt {
        if matches!(self.phase, Phase::Sending { .. }) {
            return SubmitAttempt::AlreadySending;
        }

        if !form.validate_all() {
            let issues = form.error_count();
            debug!(issues, "submission rejected by validation");
            return SubmitAttempt::Rejected { issues };
        }

        let submitted_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let Some(record) = form.try_snapshot(submitted_at) else {
            // validate_all just passed, so the snapshot cannot miss.
            return SubmitAttempt::Rejected {
                issues: form.error_count(),
            };
        };
        debug!(email = %record.email, "submission accepted, simulating send");
        self.phase = Phase::Sending {
            record,
            deadline: now + self.send_delay,
        };
        SubmitAttempt::Accepted
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.phase, Phase::Sending { .. })
    }

    /// Deadline of the in-flight send, for poll-timeout calculations.
    pub fn deadline(&self) -> Option<Instant> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Sending { deadline, .. } => Some(*deadline),
        }
    }

    /// Advance the simulated send. Once the deadline has elapsed the record
    /// is handed back exactly once and the workflow returns to Idle.
    pub fn poll(&mut self, now: Instant) -> Option<SubmissionRecord> {
        match &self.phase {
            Phase::Sending { deadline, .. } if now >= *deadline => {
                let Phase::Sending { record, .. } = std::mem::replace(&mut self.phase, Phase::Idle)
                else {
                    return None;
                };
                debug!("simulated send completed");
                Some(record)
            }
            _ => None,
        }
    }
}
