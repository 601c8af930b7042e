use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use super::domain::{
    ArtistProfile, JobApplication, JobApplicationId, JobApplicationStatus, JobDraft, JobId,
    JobPosting,
};
use super::matching::{MatchConfig, MatchScore, MatchScorer};
use super::repository::{JobApplicationRepository, JobApplicationView, JobRepository};
use super::transitions::{validate_transition, InvalidJobTransition};
use crate::workflows::access::{self, AccessDenied, Actor};
use crate::workflows::notify::{Notification, NotificationChannel, NotificationPublisher};
use crate::workflows::storage::RepositoryError;

/// Service composing the job store, the application store, the match scorer,
/// and the outbound notification seam.
pub struct JobsService<J, A, N> {
    jobs: Arc<J>,
    applications: Arc<A>,
    notifications: Arc<N>,
    scorer: MatchScorer,
}

static JOB_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_job_id() -> JobId {
    let id = JOB_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    JobId(format!("job-{id:04}"))
}

fn next_application_id() -> JobApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    JobApplicationId(format!("job-app-{id:06}"))
}

impl<J, A, N> JobsService<J, A, N>
where
    J: JobRepository + 'static,
    A: JobApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    pub fn new(jobs: Arc<J>, applications: Arc<A>, notifications: Arc<N>, config: MatchConfig) -> Self {
        Self {
            jobs,
            applications,
            notifications,
            scorer: MatchScorer::new(config),
        }
    }

    /// Publish a new job posting. Recruiter-only.
    pub fn post_job(&self, actor: &Actor, draft: JobDraft) -> Result<JobPosting, JobsServiceError> {
        access::ensure_recruiter(actor)?;

        let job = JobPosting::new(next_job_id(), actor.user_id.clone(), draft);
        let stored = self.jobs.insert(job)?;
        Ok(stored)
    }

    /// Submit an application to an open job. Artist-only, one per artist.
    pub fn apply(
        &self,
        actor: &Actor,
        job_id: &JobId,
    ) -> Result<JobApplicationView, JobsServiceError> {
        access::ensure_artist(actor)?;

        let job = self.jobs.fetch(job_id)?.ok_or(RepositoryError::NotFound)?;
        if !job.open {
            return Err(JobsServiceError::JobClosed(job.id.0));
        }

        let existing = self.applications.for_job(job_id)?;
        if existing
            .iter()
            .any(|application| application.artist_id == actor.user_id)
        {
            return Err(JobsServiceError::DuplicateApplication(job.id.0));
        }

        let application =
            JobApplication::new(next_application_id(), job_id.clone(), actor.user_id.clone(), Utc::now());
        let stored = self.applications.insert(application)?;
        Ok(stored.status_view())
    }

    /// Move an application to `to` on behalf of the posting's owner. Same
    /// semantics as the casting pipeline: same-status requests are no-ops,
    /// everything else goes through the table.
    pub fn transition(
        &self,
        actor: &Actor,
        application_id: &JobApplicationId,
        to: JobApplicationStatus,
    ) -> Result<JobApplicationView, JobsServiceError> {
        let mut application = self
            .applications
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        let job = self
            .jobs
            .fetch(&application.job_id)?
            .ok_or(RepositoryError::NotFound)?;
        access::ensure_recruiter_owns(actor, &job.recruiter_id, &job.id.0)?;

        if application.status == to {
            return Ok(application.status_view());
        }
        validate_transition(application.status, to)?;

        let first_occurrence = application.record_status(to, Utc::now());
        self.applications.update(application.clone())?;

        if first_occurrence && to == JobApplicationStatus::Hired {
            let mut details = BTreeMap::new();
            details.insert("job".to_string(), job.title.clone());
            self.dispatch(Notification {
                channel: NotificationChannel::Email,
                template: "artist_hired".to_string(),
                recipient: application.artist_id.clone(),
                details,
            });
        }

        Ok(application.status_view())
    }

    /// Withdraw an application. Artist-only, own applications only.
    pub fn withdraw(
        &self,
        actor: &Actor,
        application_id: &JobApplicationId,
    ) -> Result<JobApplicationView, JobsServiceError> {
        let mut application = self
            .applications
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        access::ensure_artist_owns(actor, &application.artist_id, &application.id.0)?;

        if application.status == JobApplicationStatus::Withdrawn {
            return Ok(application.status_view());
        }
        validate_transition(application.status, JobApplicationStatus::Withdrawn)?;

        application.record_status(JobApplicationStatus::Withdrawn, Utc::now());
        self.applications.update(application.clone())?;
        Ok(application.status_view())
    }

    /// Fetch an application's current status.
    pub fn get(
        &self,
        application_id: &JobApplicationId,
    ) -> Result<JobApplicationView, JobsServiceError> {
        let application = self
            .applications
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(application.status_view())
    }

    /// Rank open jobs for an artist, best match first, floor applied.
    pub fn opportunities(&self, artist: &ArtistProfile) -> Result<Vec<MatchScore>, JobsServiceError> {
        let jobs = self.jobs.open_jobs()?;
        Ok(self.scorer.opportunities(artist, &jobs))
    }

    /// Score a single artist/job pair without the floor.
    pub fn score(&self, artist: &ArtistProfile, job_id: &JobId) -> Result<MatchScore, JobsServiceError> {
        let job = self.jobs.fetch(job_id)?.ok_or(RepositoryError::NotFound)?;
        Ok(self.scorer.score(artist, &job))
    }

    fn dispatch(&self, notification: Notification) {
        if let Err(err) = self.notifications.publish(notification) {
            warn!(error = %err, "notification dispatch failed");
        }
    }
}

/// Error raised by the jobs service.
#[derive(Debug, thiserror::Error)]
pub enum JobsServiceError {
    #[error(transparent)]
    Transition(#[from] InvalidJobTransition),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Access(#[from] AccessDenied),
    #[error("job {0} is closed to new applications")]
    JobClosed(String),
    #[error("artist already applied to job {0}")]
    DuplicateApplication(String),
}
