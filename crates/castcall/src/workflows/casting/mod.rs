//! Casting-call application pipeline: intake, the status machine, audition
//! feedback, and the denormalized pipeline counters.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod transitions;

#[cfg(test)]
mod tests;

pub use domain::{
    AuditionFeedback, CastingApplication, CastingApplicationId, CastingApplicationStatus,
    CastingCall, CastingCallDraft, CastingCallId,
};
pub use repository::{
    CastingApplicationRepository, CastingApplicationView, CastingCallRepository, CastingCallView,
};
pub use router::casting_router;
pub use service::{CastingService, CastingServiceError};
pub use transitions::{validate_transition, InvalidTransition};
