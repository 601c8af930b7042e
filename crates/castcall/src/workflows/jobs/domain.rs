use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::access::UserId;

/// Identifier wrapper for job postings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

/// Identifier wrapper for job applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobApplicationId(pub String);

/// Experience buckets used by postings and the match scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    EntryLevel,
    MidLevel,
    SeniorLevel,
}

impl ExperienceLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::EntryLevel => "entry_level",
            Self::MidLevel => "mid_level",
            Self::SeniorLevel => "senior_level",
        }
    }

    /// Bucket years of experience: 0-2 entry, 3-5 mid, 6+ senior.
    pub const fn bucket_for(years: u8) -> Self {
        match years {
            0..=2 => Self::EntryLevel,
            3..=5 => Self::MidLevel,
            _ => Self::SeniorLevel,
        }
    }
}

/// Monthly budget window attached to a posting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
}

/// Read-only projection of an artist used by the match scorer; consumed,
/// never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistProfile {
    pub artist_id: UserId,
    #[serde(default)]
    pub skills: Vec<String>,
    pub experience_years: Option<u8>,
    pub location: Option<String>,
    pub hourly_rate: Option<f64>,
}

/// Fields a recruiter supplies when posting a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDraft {
    pub title: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub location: Option<String>,
    #[serde(default)]
    pub remote: bool,
    pub budget: Option<BudgetRange>,
}

/// A recruiter-owned job posting. The owner is a back-reference id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobId,
    pub recruiter_id: UserId,
    pub title: String,
    pub required_skills: Vec<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub location: Option<String>,
    pub remote: bool,
    pub budget: Option<BudgetRange>,
    pub open: bool,
}

impl JobPosting {
    pub fn new(id: JobId, recruiter_id: UserId, draft: JobDraft) -> Self {
        Self {
            id,
            recruiter_id,
            title: draft.title,
            required_skills: draft.required_skills,
            experience_level: draft.experience_level,
            location: draft.location,
            remote: draft.remote,
            budget: draft.budget,
            open: true,
        }
    }
}

/// Status tracked through the job application pipeline. Parallel to the
/// casting variant, with an interview leg and `Hired` as the positive
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobApplicationStatus {
    Applied,
    UnderReview,
    Shortlisted,
    InterviewScheduled,
    InterviewCompleted,
    Hired,
    Rejected,
    Withdrawn,
}

impl JobApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::UnderReview => "under_review",
            Self::Shortlisted => "shortlisted",
            Self::InterviewScheduled => "interview_scheduled",
            Self::InterviewCompleted => "interview_completed",
            Self::Hired => "hired",
            Self::Rejected => "rejected",
            Self::Withdrawn => "withdrawn",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Hired | Self::Rejected | Self::Withdrawn)
    }
}

impl fmt::Display for JobApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An artist's application to a job posting, with first-occurrence status
/// timestamps mirroring the casting pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: JobApplicationId,
    pub job_id: JobId,
    pub artist_id: UserId,
    pub status: JobApplicationStatus,
    pub applied_at: Option<DateTime<Utc>>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub shortlisted_at: Option<DateTime<Utc>>,
    pub interview_scheduled_at: Option<DateTime<Utc>>,
    pub interview_completed_at: Option<DateTime<Utc>>,
    pub hired_at: Option<DateTime<Utc>>,
    pub rejected_at: Option<DateTime<Utc>>,
    pub withdrawn_at: Option<DateTime<Utc>>,
}

impl JobApplication {
    pub fn new(id: JobApplicationId, job_id: JobId, artist_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            job_id,
            artist_id,
            status: JobApplicationStatus::Applied,
            applied_at: Some(now),
            reviewed_at: None,
            shortlisted_at: None,
            interview_scheduled_at: None,
            interview_completed_at: None,
            hired_at: None,
            rejected_at: None,
            withdrawn_at: None,
        }
    }

    /// Move to `to`, stamping the status timestamp only on first occurrence.
    pub fn record_status(&mut self, to: JobApplicationStatus, now: DateTime<Utc>) -> bool {
        self.status = to;
        let slot = match to {
            JobApplicationStatus::Applied => &mut self.applied_at,
            JobApplicationStatus::UnderReview => &mut self.reviewed_at,
            JobApplicationStatus::Shortlisted => &mut self.shortlisted_at,
            JobApplicationStatus::InterviewScheduled => &mut self.interview_scheduled_at,
            JobApplicationStatus::InterviewCompleted => &mut self.interview_completed_at,
            JobApplicationStatus::Hired => &mut self.hired_at,
            JobApplicationStatus::Rejected => &mut self.rejected_at,
            JobApplicationStatus::Withdrawn => &mut self.withdrawn_at,
        };

        if slot.is_none() {
            *slot = Some(now);
            true
        } else {
            false
        }
    }
}
