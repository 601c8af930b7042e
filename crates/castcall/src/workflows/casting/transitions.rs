use super::domain::CastingApplicationStatus;

/// Rejection raised when a requested status change is not in the table.
///
/// Callers must not retry the same request unmodified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid transition from {from} to {to}")]
pub struct InvalidTransition {
    pub from: CastingApplicationStatus,
    pub to: CastingApplicationStatus,
}

impl CastingApplicationStatus {
    /// The strict forward-transition table. Terminal states allow nothing.
    pub const fn allowed_transitions(self) -> &'static [CastingApplicationStatus] {
        use CastingApplicationStatus::*;
        match self {
            Applied => &[UnderReview, Rejected, Withdrawn],
            UnderReview => &[Shortlisted, Rejected, Withdrawn],
            Shortlisted => &[CallbackScheduled, Selected, Rejected, Withdrawn],
            CallbackScheduled => &[CallbackCompleted, Withdrawn],
            CallbackCompleted => &[Selected, Rejected],
            Selected | Rejected | Withdrawn => &[],
        }
    }
}

/// Accept or reject a requested status change against the table.
pub fn validate_transition(
    from: CastingApplicationStatus,
    to: CastingApplicationStatus,
) -> Result<(), InvalidTransition> {
    if from.allowed_transitions().contains(&to) {
        Ok(())
    } else {
        Err(InvalidTransition { from, to })
    }
}
