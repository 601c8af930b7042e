use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{JobApplication, JobApplicationId, JobId, JobPosting};
use crate::workflows::access::UserId;
use crate::workflows::storage::RepositoryError;

/// Storage abstraction for job postings.
pub trait JobRepository: Send + Sync {
    fn insert(&self, job: JobPosting) -> Result<JobPosting, RepositoryError>;
    fn update(&self, job: JobPosting) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &JobId) -> Result<Option<JobPosting>, RepositoryError>;
    fn open_jobs(&self) -> Result<Vec<JobPosting>, RepositoryError>;
}

/// Storage abstraction for job applications.
pub trait JobApplicationRepository: Send + Sync {
    fn insert(&self, application: JobApplication) -> Result<JobApplication, RepositoryError>;
    fn update(&self, application: JobApplication) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &JobApplicationId) -> Result<Option<JobApplication>, RepositoryError>;
    fn for_job(&self, job: &JobId) -> Result<Vec<JobApplication>, RepositoryError>;
}

/// Sanitized representation of a job application's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct JobApplicationView {
    pub application_id: JobApplicationId,
    pub job_id: JobId,
    pub artist_id: UserId,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_scheduled_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hired_at: Option<DateTime<Utc>>,
}

impl JobApplication {
    pub fn status_view(&self) -> JobApplicationView {
        JobApplicationView {
            application_id: self.id.clone(),
            job_id: self.job_id.clone(),
            artist_id: self.artist_id.clone(),
            status: self.status.label(),
            applied_at: self.applied_at,
            interview_scheduled_at: self.interview_scheduled_at,
            hired_at: self.hired_at,
        }
    }
}
