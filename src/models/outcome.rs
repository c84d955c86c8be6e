use std::fmt;

use crate::helpers::calendar::CalendarDay;

/// What happened to a single day of the bulk run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// Weekend, nothing was sent.
    Skipped,
    Success,
    Failed { status_code: u16, body: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub day: CalendarDay,
    pub status: OutcomeStatus,
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Success
    }

    pub fn is_skipped(&self) -> bool {
        self.status == OutcomeStatus::Skipped
    }
}

impl fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            OutcomeStatus::Skipped => write!(f, "Skipping {} (weekend)", self.day),
            OutcomeStatus::Success => write!(f, "Processing {}... SUCCESS", self.day),
            OutcomeStatus::Failed { status_code, body } => write!(
                f,
                "Processing {}... ERROR ({}): {}",
                self.day, status_code, body
            ),
        }
    }
}

/// Totals printed once the month has been walked.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub created: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn from_outcomes(outcomes: &[SubmissionOutcome]) -> Self {
        let created = outcomes.iter().filter(|o| o.is_success()).count();
        let skipped = outcomes.iter().filter(|o| o.is_skipped()).count();

        Self {
            created,
            failed: outcomes.len() - created - skipped,
            skipped,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Time entry creation finished. Created: {}, failed: {}, skipped: {}",
            self.created, self.failed, self.skipped
        )
    }
}
