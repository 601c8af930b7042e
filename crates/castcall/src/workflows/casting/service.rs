use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use super::domain::{
    AuditionFeedback, CastingApplication, CastingApplicationId, CastingApplicationStatus,
    CastingCall, CastingCallDraft, CastingCallId,
};
use super::repository::{
    CastingApplicationRepository, CastingApplicationView, CastingCallRepository, CastingCallView,
};
use super::transitions::{validate_transition, InvalidTransition};
use crate::workflows::access::{self, AccessDenied, Actor};
use crate::workflows::notify::{Notification, NotificationChannel, NotificationPublisher};
use crate::workflows::storage::RepositoryError;

/// Service composing the casting-call store, the application store, and the
/// outbound notification seam.
pub struct CastingService<C, A, N> {
    calls: Arc<C>,
    applications: Arc<A>,
    notifications: Arc<N>,
}

static CALL_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_call_id() -> CastingCallId {
    let id = CALL_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    CastingCallId(format!("call-{id:04}"))
}

fn next_application_id() -> CastingApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    CastingApplicationId(format!("cast-app-{id:06}"))
}

impl<C, A, N> CastingService<C, A, N>
where
    C: CastingCallRepository + 'static,
    A: CastingApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    pub fn new(calls: Arc<C>, applications: Arc<A>, notifications: Arc<N>) -> Self {
        Self {
            calls,
            applications,
            notifications,
        }
    }

    /// Open a new casting call. Recruiter-only.
    pub fn open_call(
        &self,
        actor: &Actor,
        draft: CastingCallDraft,
    ) -> Result<CastingCallView, CastingServiceError> {
        access::ensure_recruiter(actor)?;

        let call = CastingCall::new(next_call_id(), actor.user_id.clone(), draft);
        let stored = self.calls.insert(call)?;
        Ok(stored.view())
    }

    /// Submit an application to an open casting call. Artist-only, one
    /// application per artist per call.
    pub fn apply(
        &self,
        actor: &Actor,
        casting_call_id: &CastingCallId,
    ) -> Result<CastingApplicationView, CastingServiceError> {
        access::ensure_artist(actor)?;

        let call = self
            .calls
            .fetch(casting_call_id)?
            .ok_or(RepositoryError::NotFound)?;
        if !call.open {
            return Err(CastingServiceError::CallClosed(call.id.0));
        }

        let existing = self.applications.for_call(casting_call_id)?;
        if existing
            .iter()
            .any(|application| application.artist_id == actor.user_id)
        {
            return Err(CastingServiceError::DuplicateApplication(call.id.0));
        }

        let application = CastingApplication::new(
            next_application_id(),
            casting_call_id.clone(),
            actor.user_id.clone(),
            Utc::now(),
        );
        let stored = self.applications.insert(application)?;
        Ok(stored.status_view())
    }

    /// Move an application to `to` on behalf of the call's owning recruiter.
    ///
    /// Re-requesting the current status is an idempotent no-op: the timestamp
    /// and counters are left untouched. Any other pair outside the table is
    /// rejected with an error naming both states.
    pub fn transition(
        &self,
        actor: &Actor,
        application_id: &CastingApplicationId,
        to: CastingApplicationStatus,
    ) -> Result<CastingApplicationView, CastingServiceError> {
        let mut application = self
            .applications
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        let mut call = self
            .calls
            .fetch(&application.casting_call_id)?
            .ok_or(RepositoryError::NotFound)?;
        access::ensure_recruiter_owns(actor, &call.recruiter_id, &call.id.0)?;

        if application.status == to {
            return Ok(application.status_view());
        }
        validate_transition(application.status, to)?;

        let first_occurrence = application.record_status(to, Utc::now());
        self.applications.update(application.clone())?;

        if first_occurrence {
            match to {
                CastingApplicationStatus::Shortlisted => {
                    call.shortlisted_count += 1;
                    self.calls.update(call.clone())?;
                    self.dispatch(status_notification(&application, &call, "artist_shortlisted"));
                }
                CastingApplicationStatus::Selected => {
                    call.selected_count += 1;
                    self.calls.update(call.clone())?;
                    self.dispatch(status_notification(&application, &call, "artist_selected"));
                }
                _ => {}
            }
        }

        Ok(application.status_view())
    }

    /// Withdraw an application. Artist-only, own applications only.
    pub fn withdraw(
        &self,
        actor: &Actor,
        application_id: &CastingApplicationId,
    ) -> Result<CastingApplicationView, CastingServiceError> {
        let mut application = self
            .applications
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        access::ensure_artist_owns(actor, &application.artist_id, &application.id.0)?;

        if application.status == CastingApplicationStatus::Withdrawn {
            return Ok(application.status_view());
        }
        validate_transition(application.status, CastingApplicationStatus::Withdrawn)?;

        application.record_status(CastingApplicationStatus::Withdrawn, Utc::now());
        self.applications.update(application.clone())?;
        Ok(application.status_view())
    }

    /// Attach audition feedback. The rating is validated before anything is
    /// persisted.
    pub fn record_feedback(
        &self,
        actor: &Actor,
        application_id: &CastingApplicationId,
        feedback: AuditionFeedback,
    ) -> Result<CastingApplicationView, CastingServiceError> {
        if !(1..=5).contains(&feedback.rating) {
            return Err(CastingServiceError::InvalidRating(feedback.rating));
        }

        let mut application = self
            .applications
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        let call = self
            .calls
            .fetch(&application.casting_call_id)?
            .ok_or(RepositoryError::NotFound)?;
        access::ensure_recruiter_owns(actor, &call.recruiter_id, &call.id.0)?;

        application.audition_feedback = Some(feedback);
        self.applications.update(application.clone())?;
        Ok(application.status_view())
    }

    /// Fetch an application's current status for API responses.
    pub fn get(
        &self,
        application_id: &CastingApplicationId,
    ) -> Result<CastingApplicationView, CastingServiceError> {
        let application = self
            .applications
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(application.status_view())
    }

    /// Fetch a casting call with its counters.
    pub fn get_call(
        &self,
        casting_call_id: &CastingCallId,
    ) -> Result<CastingCallView, CastingServiceError> {
        let call = self
            .calls
            .fetch(casting_call_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(call.view())
    }

    fn dispatch(&self, notification: Notification) {
        if let Err(err) = self.notifications.publish(notification) {
            warn!(error = %err, "notification dispatch failed");
        }
    }
}

fn status_notification(
    application: &CastingApplication,
    call: &CastingCall,
    template: &str,
) -> Notification {
    let mut details = BTreeMap::new();
    details.insert("casting_call".to_string(), call.title.clone());
    details.insert("production".to_string(), call.production.clone());
    details.insert(
        "status".to_string(),
        application.status.label().to_string(),
    );

    Notification {
        channel: NotificationChannel::Email,
        template: template.to_string(),
        recipient: application.artist_id.clone(),
        details,
    }
}

/// Error raised by the casting service.
#[derive(Debug, thiserror::Error)]
pub enum CastingServiceError {
    #[error(transparent)]
    Transition(#[from] InvalidTransition),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Access(#[from] AccessDenied),
    #[error("rating {0} is outside the 1-5 range")]
    InvalidRating(u8),
    #[error("casting call {0} is closed to new applications")]
    CallClosed(String),
    #[error("artist already applied to casting call {0}")]
    DuplicateApplication(String),
}
