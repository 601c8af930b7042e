use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;

use castcall::workflows::access::UserId;
use castcall::workflows::casting::{
    CastingApplication, CastingApplicationId, CastingApplicationRepository, CastingCall,
    CastingCallId, CastingCallRepository,
};
use castcall::workflows::dashboard::{DashboardMetric, MetricEvent, MetricSource};
use castcall::workflows::jobs::{
    JobApplication, JobApplicationId, JobApplicationRepository, JobId, JobPosting, JobRepository,
};
use castcall::workflows::notify::{Notification, NotificationError, NotificationPublisher};
use castcall::workflows::storage::RepositoryError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryCastingCalls {
    records: Arc<Mutex<HashMap<CastingCallId, CastingCall>>>,
}

impl CastingCallRepository for InMemoryCastingCalls {
    fn insert(&self, call: CastingCall) -> Result<CastingCall, RepositoryError> {
        let mut guard = self.records.lock().expect("casting call mutex poisoned");
        if guard.contains_key(&call.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(call.id.clone(), call.clone());
        Ok(call)
    }

    fn update(&self, call: CastingCall) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("casting call mutex poisoned");
        if guard.contains_key(&call.id) {
            guard.insert(call.id.clone(), call);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &CastingCallId) -> Result<Option<CastingCall>, RepositoryError> {
        let guard = self.records.lock().expect("casting call mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryCastingApplications {
    records: Arc<Mutex<HashMap<CastingApplicationId, CastingApplication>>>,
}

impl CastingApplicationRepository for InMemoryCastingApplications {
    fn insert(
        &self,
        application: CastingApplication,
    ) -> Result<CastingApplication, RepositoryError> {
        let mut guard = self.records.lock().expect("application mutex poisoned");
        if guard.contains_key(&application.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(application.id.clone(), application.clone());
        Ok(application)
    }

    fn update(&self, application: CastingApplication) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("application mutex poisoned");
        if guard.contains_key(&application.id) {
            guard.insert(application.id.clone(), application);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(
        &self,
        id: &CastingApplicationId,
    ) -> Result<Option<CastingApplication>, RepositoryError> {
        let guard = self.records.lock().expect("application mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn for_call(
        &self,
        call: &CastingCallId,
    ) -> Result<Vec<CastingApplication>, RepositoryError> {
        let guard = self.records.lock().expect("application mutex poisoned");
        Ok(guard
            .values()
            .filter(|application| &application.casting_call_id == call)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryJobs {
    records: Arc<Mutex<HashMap<JobId, JobPosting>>>,
}

impl JobRepository for InMemoryJobs {
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
pub(crate) struct InMemoryJobApplications {
    records: Arc<Mutex<HashMap<JobApplicationId, JobApplication>>>,
}

impl JobApplicationRepository for InMemoryJobApplications {
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
        if guard.contains_key(&application.id) {
            guard.insert(application.id.clone(), application);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
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

/// Notification adapter that records instead of delivering; real SMTP/SMS
/// gateways sit behind the same trait in production deployments.
#[derive(Default, Clone)]
pub(crate) struct InMemoryNotifications {
    events: Arc<Mutex<Vec<Notification>>>,
}

impl InMemoryNotifications {
    pub(crate) fn events(&self) -> Vec<Notification> {
        self.events
            .lock()
            .expect("notification mutex poisoned")
            .clone()
    }
}

impl NotificationPublisher for InMemoryNotifications {
    fn publish(&self, notification: Notification) -> Result<(), NotificationError> {
        self.events
            .lock()
            .expect("notification mutex poisoned")
            .push(notification);
        Ok(())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryMetricSource {
    events: Arc<Mutex<HashMap<(UserId, DashboardMetric), Vec<MetricEvent>>>>,
}

impl InMemoryMetricSource {
    pub(crate) fn record(&self, user: &UserId, metric: DashboardMetric, event: MetricEvent) {
        self.events
            .lock()
            .expect("metric mutex poisoned")
            .entry((user.clone(), metric))
            .or_default()
            .push(event);
    }
}

impl MetricSource for InMemoryMetricSource {
    fn events(
        &self,
        user: &UserId,
        metric: DashboardMetric,
    ) -> Result<Vec<MetricEvent>, RepositoryError> {
        let guard = self.events.lock().expect("metric mutex poisoned");
        Ok(guard
            .get(&(user.clone(), metric))
            .cloned()
            .unwrap_or_default())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
