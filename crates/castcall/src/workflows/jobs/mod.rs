//! Job postings, the job application pipeline, and artist/job match scoring.

pub mod domain;
pub mod matching;
pub mod repository;
pub mod router;
pub mod service;
pub mod transitions;

#[cfg(test)]
mod tests;

pub use domain::{
    ArtistProfile, BudgetRange, ExperienceLevel, JobApplication, JobApplicationId,
    JobApplicationStatus, JobDraft, JobId, JobPosting,
};
pub use matching::{MatchComponent, MatchConfig, MatchFactor, MatchScore, MatchScorer};
pub use repository::{JobApplicationRepository, JobApplicationView, JobRepository};
pub use router::jobs_router;
pub use service::{JobsService, JobsServiceError};
pub use transitions::{validate_transition, InvalidJobTransition};
