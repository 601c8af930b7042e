use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::workflows::access::{Actor, Role, UserId};
use crate::workflows::jobs::domain::{
    ArtistProfile, BudgetRange, ExperienceLevel, JobApplication, JobApplicationId, JobDraft,
    JobId, JobPosting,
};
use crate::workflows::jobs::matching::MatchConfig;
use crate::workflows::jobs::repository::{JobApplicationRepository, JobRepository};
use crate::workflows::jobs::service::JobsService;
use crate::workflows::notify::{Notification, NotificationError, NotificationPublisher};
use crate::workflows::storage::RepositoryError;

pub(super) fn recruiter() -> Actor {
    Actor {
        user_id: UserId("recruiter-1".to_string()),
        role: Role::Recruiter,
    }
}

pub(super) fn artist() -> Actor {
    Actor {
        user_id: UserId("artist-1".to_string()),
        role: Role::Artist,
    }
}

pub(super) fn mumbai_profile() -> ArtistProfile {
    ArtistProfile {
        artist_id: UserId("artist-1".to_string()),
        skills: vec!["Acting".to_string(), "Dancing".to_string()],
        experience_years: Some(4),
        location: Some("Mumbai".to_string()),
        hourly_rate: Some(500.0),
    }
}

pub(super) fn empty_profile() -> ArtistProfile {
    ArtistProfile {
        artist_id: UserId("artist-empty".to_string()),
        skills: Vec::new(),
        experience_years: None,
        location: None,
        hourly_rate: None,
    }
}

pub(super) fn mumbai_job_draft() -> JobDraft {
    JobDraft {
        title: "Feature Film Supporting Role".to_string(),
        required_skills: vec!["Acting".to_string(), "Singing".to_string()],
        experience_level: Some(ExperienceLevel::MidLevel),
        location: Some("Mumbai".to_string()),
        remote: false,
        budget: Some(BudgetRange {
            min: 70_000.0,
            max: 90_000.0,
        }),
    }
}

pub(super) fn job(id: &str, draft: JobDraft) -> JobPosting {
    JobPosting::new(
        JobId(id.to_string()),
        UserId("recruiter-1".to_string()),
        draft,
    )
}

pub(super) fn build_service() -> (
    JobsService<MemoryJobs, MemoryJobApplications, MemoryNotifications>,
    Arc<MemoryJobs>,
    Arc<MemoryJobApplications>,
    Arc<MemoryNotifications>,
) {
    let jobs = Arc::new(MemoryJobs::default());
    let applications = Arc::new(MemoryJobApplications::default());
    let notifications = Arc::new(MemoryNotifications::default());
    let service = JobsService::new(
        jobs.clone(),
        applications.clone(),
        notifications.clone(),
        MatchConfig::default(),
    );
    (service, jobs, applications, notifications)
}

#[derive(Default, Clone)]
pub(super) struct MemoryJobs {
    records: Arc<Mutex<HashMap<JobId, JobPosting>>>,
}

impl JobRepository for MemoryJobs {
    fn insert(&self, job: JobPosting) -> Result<JobPosting, RepositoryError> {
        let mut guard = self.records.lock().expect("job mutex poisoned");
        if guard.contains_key(&job.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(job.id.clone(), job.clone());
        Ok(job)
    }

    fn update(&self, job: JobPosting) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("job mutex poisoned");
        if guard.contains_key(&job.id) {
            guard.insert(job.id.clone(), job);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &JobId) -> Result<Option<JobPosting>, RepositoryError> {
        let guard = self.records.lock().expect("job mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn open_jobs(&self) -> Result<Vec<JobPosting>, RepositoryError> {
        let guard = self.records.lock().expect("job mutex poisoned");
        Ok(guard.values().filter(|job| job.open).cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryJobApplications {
    records: Arc<Mutex<HashMap<JobApplicationId, JobApplication>>>,
}

impl JobApplicationRepository for MemoryJobApplications {
    fn insert(&self, application: JobApplication) -> Result<JobApplication, RepositoryError> {
        let mut guard = self.records.lock().expect("application mutex poisoned");
        if guard.contains_key(&application.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(application.id.clone(), application.clone());
        Ok(application)
    }

    fn update(&self, application: JobApplication) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("application mutex poisoned");
        guard.insert(application.id.clone(), application);
        Ok(())
    }

    fn fetch(&self, id: &JobApplicationId) -> Result<Option<JobApplication>, RepositoryError> {
        let guard = self.records.lock().expect("application mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn for_job(&self, job: &JobId) -> Result<Vec<JobApplication>, RepositoryError> {
        let guard = self.records.lock().expect("application mutex poisoned");
        Ok(guard
            .values()
            .filter(|application| &application.job_id == job)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifications {
    events: Arc<Mutex<Vec<Notification>>>,
}

impl MemoryNotifications {
    pub(super) fn events(&self) -> Vec<Notification> {
        self.events
            .lock()
            .expect("notification mutex poisoned")
            .clone()
    }
}

impl NotificationPublisher for MemoryNotifications {
    fn publish(&self, notification: Notification) -> Result<(), NotificationError> {
        self.events
            .lock()
            .expect("notification mutex poisoned")
            .push(notification);
        Ok(())
    }
}
