use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::access::{Actor, Role, UserId};
use crate::workflows::casting::domain::{
    CastingApplication, CastingApplicationId, CastingCall, CastingCallDraft, CastingCallId,
};
use crate::workflows::casting::repository::{
    CastingApplicationRepository, CastingCallRepository,
};
use crate::workflows::casting::router::casting_router;
use crate::workflows::casting::service::CastingService;
use crate::workflows::notify::{Notification, NotificationError, NotificationPublisher};
use crate::workflows::storage::RepositoryError;

pub(super) fn recruiter() -> Actor {
    Actor {
        user_id: UserId("recruiter-1".to_string()),
        role: Role::Recruiter,
    }
}

pub(super) fn other_recruiter() -> Actor {
    Actor {
        user_id: UserId("recruiter-2".to_string()),
        role: Role::Recruiter,
    }
}

pub(super) fn artist() -> Actor {
    Actor {
        user_id: UserId("artist-1".to_string()),
        role: Role::Artist,
    }
}

pub(super) fn call_draft() -> CastingCallDraft {
    CastingCallDraft {
        title: "Lead Dancer".to_string(),
        production: "Monsoon Nights".to_string(),
        location: Some("Mumbai".to_string()),
        compensation: Some(45000.0),
    }
}

pub(super) fn build_service() -> (
    CastingService<MemoryCalls, MemoryApplications, MemoryNotifications>,
    Arc<MemoryCalls>,
    Arc<MemoryApplications>,
    Arc<MemoryNotifications>,
) {
    let calls = Arc::new(MemoryCalls::default());
    let applications = Arc::new(MemoryApplications::default());
    let notifications = Arc::new(MemoryNotifications::default());
    let service = CastingService::new(calls.clone(), applications.clone(), notifications.clone());
    (service, calls, applications, notifications)
}

#[derive(Default, Clone)]
pub(super) struct MemoryCalls {
    records: Arc<Mutex<HashMap<CastingCallId, CastingCall>>>,
}

impl CastingCallRepository for MemoryCalls {
    fn insert(&self, call: CastingCall) -> Result<CastingCall, RepositoryError> {
        let mut guard = self.records.lock().expect("call mutex poisoned");
        if guard.contains_key(&call.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(call.id.clone(), call.clone());
        Ok(call)
    }

    fn update(&self, call: CastingCall) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("call mutex poisoned");
        if guard.contains_key(&call.id) {
            guard.insert(call.id.clone(), call);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &CastingCallId) -> Result<Option<CastingCall>, RepositoryError> {
        let guard = self.records.lock().expect("call mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryApplications {
    records: Arc<Mutex<HashMap<CastingApplicationId, CastingApplication>>>,
}

impl CastingApplicationRepository for MemoryApplications {
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
        guard.insert(application.id.clone(), application);
        Ok(())
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
pub(super) struct MemoryNotifications {
    events: Arc<Mutex<Vec<Notification>>>,
}

impl MemoryNotifications {
    pub(super) fn events(&self) -> Vec<Notification> {
        self.events.lock().expect("notification mutex poisoned").clone()
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

/// Publisher that always fails, for the fire-and-forget contract.
pub(super) struct FailingNotifications;

impl NotificationPublisher for FailingNotifications {
    fn publish(&self, _notification: Notification) -> Result<(), NotificationError> {
        Err(NotificationError::Transport("smtp offline".to_string()))
    }
}

pub(super) fn router_with_service(
    service: CastingService<MemoryCalls, MemoryApplications, MemoryNotifications>,
) -> axum::Router {
    casting_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
