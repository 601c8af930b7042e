use super::domain::JobApplicationStatus;

/// Rejection raised when a requested job-application status change is not in
/// the table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid transition from {from} to {to}")]
pub struct InvalidJobTransition {
    pub from: JobApplicationStatus,
    pub to: JobApplicationStatus,
}

impl JobApplicationStatus {
    /// Forward-transition table for the job pipeline. Terminal states allow
    /// nothing.
    pub const fn allowed_transitions(self) -> &'static [JobApplicationStatus] {
        use JobApplicationStatus::*;
        match self {
            Applied => &[UnderReview, Rejected, Withdrawn],
            UnderReview => &[Shortlisted, Rejected, Withdrawn],
            Shortlisted => &[InterviewScheduled, Hired, Rejected, Withdrawn],
            InterviewScheduled => &[InterviewCompleted, Withdrawn],
            InterviewCompleted => &[Hired, Rejected],
            Hired | Rejected | Withdrawn => &[],
        }
    }
}

pub fn validate_transition(
    from: JobApplicationStatus,
    to: JobApplicationStatus,
) -> Result<(), InvalidJobTransition> {
    if from.allowed_transitions().contains(&to) {
        Ok(())
    } else {
        Err(InvalidJobTransition { from, to })
    }
}
